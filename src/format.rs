use crate::complex::Complex;
use crate::error::CxError;
use crate::real::Real;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::str::FromStr;
use std::sync::OnceLock;

const NAN_TOKEN: &str = "(NaN)";
const INF_TOKEN: &str = "(Infinity)";
const NEG_INF_TOKEN: &str = "(-Infinity)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    French,
    German,
    Italian,
    Spanish,
    Japanese,
}

impl Locale {
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::English | Locale::Japanese => '.',
            Locale::French | Locale::German | Locale::Italian | Locale::Spanish => ',',
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::German => "de",
            Locale::Italian => "it",
            Locale::Spanish => "es",
            Locale::Japanese => "ja",
        }
    }
}

impl FromStr for Locale {
    type Err = SimpleError;

    fn from_str(val: &str) -> Result<Locale, SimpleError> {
        match val.to_lowercase().replace('-', "_").as_str() {
            "english" | "en" | "en_us" | "en_gb" => Ok(Locale::English),
            "french" | "fr" | "fr_fr" | "fr_ca" => Ok(Locale::French),
            "german" | "de" | "de_de" => Ok(Locale::German),
            "italian" | "it" | "it_it" => Ok(Locale::Italian),
            "spanish" | "es" | "es_es" => Ok(Locale::Spanish),
            "japanese" | "ja" | "ja_jp" => Ok(Locale::Japanese),
            _ => bail!("unrecognized locale: {}", val),
        }
    }
}

/// Cursor into a parsed string: `index` advances past what was consumed,
/// `error_index` points at the offending character after a failure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParsePosition {
    pub index: usize,
    pub error_index: Option<usize>,
}

impl ParsePosition {
    pub fn new(index: usize) -> Self {
        ParsePosition {
            index,
            error_index: None,
        }
    }
}

/// Plain decimal formatting of a single scalar.
///
/// Values are rounded half-even to at most `maximum_fraction_digits`,
/// trailing zeros are dropped down to `minimum_fraction_digits`, and the
/// non-finite values are written as `(NaN)`, `(Infinity)` and `(-Infinity)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    maximum_fraction_digits: usize,
    minimum_fraction_digits: usize,
    decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::new(Locale::default())
    }
}

impl NumberFormat {
    pub fn new(locale: Locale) -> Self {
        NumberFormat {
            maximum_fraction_digits: 10,
            minimum_fraction_digits: 0,
            decimal_separator: locale.decimal_separator(),
        }
    }

    pub fn maximum_fraction_digits(&self) -> usize {
        self.maximum_fraction_digits
    }

    /// Lowers the minimum too if it would exceed the new maximum
    pub fn set_maximum_fraction_digits(&mut self, digits: usize) {
        self.maximum_fraction_digits = digits;
        self.minimum_fraction_digits = self.minimum_fraction_digits.min(digits);
    }

    pub fn minimum_fraction_digits(&self) -> usize {
        self.minimum_fraction_digits
    }

    /// Raises the maximum too if it would fall below the new minimum
    pub fn set_minimum_fraction_digits(&mut self, digits: usize) {
        self.minimum_fraction_digits = digits;
        self.maximum_fraction_digits = self.maximum_fraction_digits.max(digits);
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn set_decimal_separator(&mut self, separator: char) {
        self.decimal_separator = separator;
    }

    pub fn format<T: Real>(&self, x: T) -> String {
        if x.is_nan() {
            return NAN_TOKEN.to_string();
        }
        if x.is_infinite() {
            return if x > T::C0 { INF_TOKEN } else { NEG_INF_TOKEN }.to_string();
        }

        let digits = format!("{:.*}", self.maximum_fraction_digits, x.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let mut frac = frac_part.trim_end_matches('0').to_string();
        while frac.len() < self.minimum_fraction_digits {
            frac.push('0');
        }

        let mut text = String::with_capacity(digits.len() + 1);
        if x.is_sign_negative() {
            text.push('-');
        }
        text.push_str(int_part);
        if !frac.is_empty() {
            text.push(self.decimal_separator);
            text.push_str(&frac);
        }
        text
    }

    /// Parse one number starting at `pos.index`. On success `pos.index` moves
    /// past the number; on failure it is left alone and `pos.error_index` set.
    pub fn parse<T: Real>(&self, source: &str, pos: &mut ParsePosition) -> Option<T> {
        let start = pos.index;
        let rest = tail(source, start);

        for (token, value) in [
            (NAN_TOKEN, T::NAN_C),
            (INF_TOKEN, T::INF_C),
            (NEG_INF_TOKEN, T::NEG_INF_C),
        ] {
            if rest.starts_with(token) {
                pos.index = start + token.len();
                return Some(value);
            }
        }

        let value = number_pattern().and_then(|re| re.captures(rest)).and_then(|caps| {
            let int = caps.get(1)?;
            let fraction = caps
                .get(2)
                .filter(|sep| sep.as_str().starts_with(self.decimal_separator))
                .and_then(|_| caps.get(3))
                .filter(|frac| !int.as_str().is_empty() || !frac.as_str().is_empty());
            let len = match fraction {
                Some(frac) => frac.end(),
                None if !int.as_str().is_empty() => int.end(),
                None => return None,
            };
            let text = rest[..len].replace(self.decimal_separator, ".");
            T::from_str_radix(&text, 10).ok().map(|v| (v, len))
        });
        match value {
            Some((v, len)) => {
                pos.index = start + len;
                Some(v)
            }
            None => {
                pos.error_index = Some(start);
                None
            }
        }
    }
}

// Optional sign, integer digits, then one candidate separator and the
// fraction digits. The separator is checked against the format in `parse`.
fn number_pattern() -> Option<&'static Regex> {
    static NUMBER: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    NUMBER
        .get_or_init(|| Regex::new(r"^-?(\d*)(?:(\D)(\d*))?"))
        .as_ref()
        .ok()
}

/// Text form `re + imi` / `re - imi` of a complex value.
///
/// ```
/// use cxkit::complex::Complex64;
/// use cxkit::format::ComplexFormat;
///
/// let cf = ComplexFormat::new();
/// assert_eq!(cf.format(&Complex64::new(1.5, -2.0)), "1.5 - 2i");
/// assert_eq!(cf.parse::<f64>("1 + i").unwrap(), Complex64::new(1.0, 1.0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexFormat {
    imaginary_character: String,
    real_format: NumberFormat,
    imaginary_format: NumberFormat,
}

impl Default for ComplexFormat {
    fn default() -> Self {
        ComplexFormat::new()
    }
}

impl ComplexFormat {
    pub fn new() -> Self {
        ComplexFormat::with_locale(Locale::default())
    }

    pub fn with_locale(locale: Locale) -> Self {
        ComplexFormat::with_format(NumberFormat::new(locale))
    }

    /// Same number format for both parts
    pub fn with_format(format: NumberFormat) -> Self {
        ComplexFormat {
            imaginary_character: "i".to_string(),
            real_format: format.clone(),
            imaginary_format: format,
        }
    }

    pub fn with_formats(real_format: NumberFormat, imaginary_format: NumberFormat) -> Self {
        ComplexFormat {
            imaginary_character: "i".to_string(),
            real_format,
            imaginary_format,
        }
    }

    pub fn with_imaginary_character(
        imaginary_character: &str,
        locale: Locale,
    ) -> Result<Self, CxError> {
        ComplexFormat::with_locale(locale).imaginary_character(imaginary_character)
    }

    /// Replace the imaginary unit symbol
    pub fn imaginary_character(mut self, imaginary_character: &str) -> Result<Self, CxError> {
        if imaginary_character.is_empty() {
            return Err(CxError::IllegalArgument(
                "empty string for imaginary character".to_string(),
            ));
        }
        self.imaginary_character = imaginary_character.to_string();
        Ok(self)
    }

    pub fn get_imaginary_character(&self) -> &str {
        &self.imaginary_character
    }

    pub fn real_format(&self) -> &NumberFormat {
        &self.real_format
    }

    pub fn real_format_mut(&mut self) -> &mut NumberFormat {
        &mut self.real_format
    }

    pub fn imaginary_format(&self) -> &NumberFormat {
        &self.imaginary_format
    }

    pub fn imaginary_format_mut(&mut self) -> &mut NumberFormat {
        &mut self.imaginary_format
    }

    pub fn format<T: Real>(&self, z: &Complex<T>) -> String {
        let mut text = self.real_format.format(z.re());
        let im = z.im();
        if im < T::C0 {
            text.push_str(" - ");
            text.push_str(&self.format_imaginary(-im));
        } else if im > T::C0 || im.is_nan() {
            text.push_str(" + ");
            text.push_str(&self.format_imaginary(im));
        }
        text
    }

    /// A scalar in the real-part format
    pub fn format_real<T: Real>(&self, x: T) -> String {
        self.real_format.format(x)
    }

    // a unit coefficient is written as the bare imaginary character
    fn format_imaginary<T: Real>(&self, abs_im: T) -> String {
        let coefficient = self.imaginary_format.format(abs_im);
        if coefficient == "1" {
            self.imaginary_character.clone()
        } else {
            coefficient + &self.imaginary_character
        }
    }

    /// Parse starting at `pos.index`; see [`NumberFormat::parse`] for how
    /// `pos` is updated
    pub fn parse_at<T: Real>(&self, source: &str, pos: &mut ParsePosition) -> Option<Complex<T>> {
        let mut cursor = ParsePosition::new(skip_whitespace(source, pos.index));
        let re = match self.real_format.parse::<T>(source, &mut cursor) {
            Some(re) => re,
            None => {
                pos.error_index = cursor.error_index;
                return None;
            }
        };

        let start = cursor.index;
        let op = skip_whitespace(source, start);
        let sign = match tail(source, op).chars().next() {
            None => {
                pos.index = op;
                return Some(Complex::new(re, T::C0));
            }
            Some('+') => T::C1,
            Some('-') => T::CN1,
            Some(_) => {
                pos.error_index = Some(start);
                return None;
            }
        };

        let mut cursor = ParsePosition::new(skip_whitespace(source, op + 1));
        let im = match self.imaginary_format.parse::<T>(source, &mut cursor) {
            Some(im) => im,
            None if tail(source, cursor.index).starts_with(&self.imaginary_character) => {
                pos.index = cursor.index + self.imaginary_character.len();
                return Some(Complex::new(re, sign));
            }
            None => {
                pos.error_index = cursor.error_index;
                return None;
            }
        };

        let end = cursor.index;
        if !tail(source, end).starts_with(&self.imaginary_character) {
            pos.error_index = Some(end);
            return None;
        }
        pos.index = end + self.imaginary_character.len();
        Some(Complex::new(re, im * sign))
    }

    /// Parse from the start of `source`; trailing text after the complex
    /// value is ignored
    pub fn parse<T: Real>(&self, source: &str) -> Result<Complex<T>, CxError> {
        let mut pos = ParsePosition::new(0);
        self.parse_at(source, &mut pos)
            .ok_or_else(|| CxError::Parse {
                source: source.to_string(),
                error_index: pos.error_index.unwrap_or(0),
            })
    }
}

impl<T: Real> FromStr for Complex<T> {
    type Err = CxError;

    /// Reads the `re + imi` form of the default [`ComplexFormat`]
    fn from_str(s: &str) -> Result<Self, CxError> {
        ComplexFormat::new().parse(s)
    }
}

fn tail(source: &str, index: usize) -> &str {
    source.get(index..).unwrap_or("")
}

fn skip_whitespace(source: &str, index: usize) -> usize {
    let rest = tail(source, index);
    index + (rest.len() - rest.trim_start().len())
}

#[cfg(test)]
mod format_tests {
    use super::*;
    use crate::complex::{Complex32, Complex64};
    use std::f64::consts::PI;

    const LOCALES: [Locale; 2] = [Locale::English, Locale::French];

    fn check_format(locale: Locale, z: Complex64, expected: &str) {
        let expected = expected.replace('.', &locale.decimal_separator().to_string());
        assert_eq!(
            ComplexFormat::with_locale(locale).format(&z),
            expected,
            "locale {:?}",
            locale
        );
    }

    fn check_parse(locale: Locale, source: &str, expected: Complex64) {
        let source = source.replace('.', &locale.decimal_separator().to_string());
        let calc: Complex64 = ComplexFormat::with_locale(locale).parse(&source).unwrap();
        assert_eq!(calc, expected, "locale {:?} source {}", locale, source);
    }

    #[test]
    fn test_format_simple() {
        for locale in LOCALES {
            check_format(locale, Complex64::new(1.0, 2.0), "1 + 2i");
            check_format(locale, Complex64::new(1.23, 1.43), "1.23 + 1.43i");
            check_format(
                locale,
                Complex64::new(1.232323232323, 1.434343434343),
                "1.2323232323 + 1.4343434343i",
            );
        }
    }

    #[test]
    fn test_format_signs() {
        for locale in LOCALES {
            check_format(
                locale,
                Complex64::new(-1.232323232323, 1.43),
                "-1.2323232323 + 1.43i",
            );
            check_format(
                locale,
                Complex64::new(1.23, -1.434343434343),
                "1.23 - 1.4343434343i",
            );
            check_format(
                locale,
                Complex64::new(-1.232323232323, -1.434343434343),
                "-1.2323232323 - 1.4343434343i",
            );
            check_format(
                locale,
                Complex64::new(232.22222222222, -342.3333333333),
                "232.2222222222 - 342.3333333333i",
            );
        }
    }

    #[test]
    fn test_format_zero_parts() {
        for locale in LOCALES {
            check_format(locale, Complex64::new(0.0, -1.434343434343), "0 - 1.4343434343i");
            check_format(locale, Complex64::new(30.23333333333, 0.0), "30.2333333333");
            check_format(locale, Complex64::new(30.23333333333, -0.0), "30.2333333333");
        }
    }

    #[test]
    fn test_format_trim_one_imaginary() {
        for locale in LOCALES {
            let sep = locale.decimal_separator();
            let mut cf = ComplexFormat::with_locale(locale);
            cf.imaginary_format_mut().set_maximum_fraction_digits(1);
            assert_eq!(cf.format(&Complex64::new(1.0, 1.04)), "1 + i");
            assert_eq!(cf.format(&Complex64::new(1.0, 1.09)), format!("1 + 1{}1i", sep));
            assert_eq!(cf.format(&Complex64::new(1.0, -1.09)), format!("1 - 1{}1i", sep));
            assert_eq!(cf.format(&Complex64::new(1.0, -1.04)), "1 - i");
        }
    }

    #[test]
    fn test_format_imaginary_character() {
        let cf = ComplexFormat::with_imaginary_character("j", Locale::English).unwrap();
        assert_eq!(cf.format(&Complex64::new(1.0, 1.0)), "1 + j");
        assert_eq!(cf.get_imaginary_character(), "j");
        assert!(matches!(
            ComplexFormat::with_imaginary_character("", Locale::English),
            Err(CxError::IllegalArgument(_))
        ));
    }

    #[test]
    fn test_format_special() {
        let cf = ComplexFormat::new();
        assert_eq!(cf.format(&Complex64::NAN), "(NaN) + (NaN)i");
        assert_eq!(
            cf.format(&Complex64::new(f64::INFINITY, f64::INFINITY)),
            "(Infinity) + (Infinity)i"
        );
        assert_eq!(
            cf.format(&Complex64::new(f64::NEG_INFINITY, f64::NEG_INFINITY)),
            "(-Infinity) - (Infinity)i"
        );
    }

    #[test]
    fn test_format_real() {
        for locale in LOCALES {
            let cf = ComplexFormat::with_locale(locale);
            assert_eq!(
                cf.format_real(PI),
                format!("3{}1415926536", locale.decimal_separator())
            );
        }
    }

    #[test]
    fn test_number_format_digits() {
        let mut nf = NumberFormat::default();
        assert_eq!(nf.format(0.125), "0.125");
        nf.set_maximum_fraction_digits(2);
        assert_eq!(nf.format(0.1251), "0.13");
        assert_eq!(nf.format(0.374), "0.37");
        assert_eq!(nf.format(0.999), "1");
        nf.set_minimum_fraction_digits(4);
        assert_eq!(nf.maximum_fraction_digits(), 4);
        assert_eq!(nf.format(2.5), "2.5000");
        nf.set_maximum_fraction_digits(0);
        assert_eq!(nf.minimum_fraction_digits(), 0);
        assert_eq!(nf.format(2.4), "2");
        assert_eq!(nf.format(3.6), "4");
        assert_eq!(nf.format(-0.0), "-0");
    }

    #[test]
    fn test_format_f32() {
        let cf = ComplexFormat::new();
        assert_eq!(cf.format(&Complex32::new(1.5, -0.25)), "1.5 - 0.25i");
    }

    #[test]
    fn test_parse_simple() {
        for locale in LOCALES {
            check_parse(locale, "1 + 1i", Complex64::new(1.0, 1.0));
            check_parse(locale, "1.23 + 1.43i", Complex64::new(1.23, 1.43));
            check_parse(
                locale,
                "1.232323232323 + 1.434343434343i",
                Complex64::new(1.232323232323, 1.434343434343),
            );
        }
    }

    #[test]
    fn test_parse_signs() {
        for locale in LOCALES {
            check_parse(
                locale,
                "-1.232323232323 + 1.4343i",
                Complex64::new(-1.232323232323, 1.4343),
            );
            check_parse(
                locale,
                "1.2323 - 1.434343434343i",
                Complex64::new(1.2323, -1.434343434343),
            );
            check_parse(
                locale,
                "-1.232323232323 - 1.434343434343i",
                Complex64::new(-1.232323232323, -1.434343434343),
            );
        }
    }

    #[test]
    fn test_parse_zero_parts() {
        for locale in LOCALES {
            check_parse(locale, "0.0 - 1.4343i", Complex64::new(0.0, -1.4343));
            check_parse(locale, "-1.2323", Complex64::new(-1.2323, 0.0));
            check_parse(locale, "  -1.2323  ", Complex64::new(-1.2323, 0.0));
        }
    }

    #[test]
    fn test_parse_imaginary_character() {
        let cf = ComplexFormat::with_imaginary_character("j", Locale::English).unwrap();
        let calc: Complex64 = cf.parse("-1.2323 - 1.4343j").unwrap();
        assert_eq!(calc, Complex64::new(-1.2323, -1.4343));
    }

    #[test]
    fn test_parse_special() {
        let cf = ComplexFormat::new();
        let calc: Complex64 = cf.parse("(NaN) + (NaN)i").unwrap();
        assert!(calc.is_nan());
        let calc: Complex64 = cf.parse("(Infinity) + (Infinity)i").unwrap();
        assert_eq!(calc, Complex64::new(f64::INFINITY, f64::INFINITY));
        let calc: Complex64 = cf.parse("(-Infinity) - (Infinity)i").unwrap();
        assert_eq!(calc, Complex64::new(f64::NEG_INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_bare_imaginary() {
        let cf = ComplexFormat::new();
        for z in [
            Complex64::new(1.0, 1.0),
            Complex64::new(1.0, -1.0),
            Complex64::new(-3.5, 1.0),
        ] {
            let text = cf.format(&z);
            assert_eq!(cf.parse::<f64>(&text).unwrap(), z, "{}", text);
        }
    }

    #[test]
    fn test_parse_forgotten_imaginary_character() {
        let mut pos = ParsePosition::new(0);
        assert!(ComplexFormat::new().parse_at::<f64>("1 + 1", &mut pos).is_none());
        assert_eq!(pos.error_index, Some(5));
        assert_eq!(pos.index, 0);

        let err = ComplexFormat::new().parse::<f64>("1 + 1").unwrap_err();
        assert_eq!(
            err,
            CxError::Parse {
                source: "1 + 1".to_string(),
                error_index: 5
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let cf = ComplexFormat::new();
        let mut pos = ParsePosition::new(0);
        assert!(cf.parse_at::<f64>("abc", &mut pos).is_none());
        assert_eq!(pos.error_index, Some(0));

        let mut pos = ParsePosition::new(0);
        assert!(cf.parse_at::<f64>("1 * 2i", &mut pos).is_none());
        assert_eq!(pos.error_index, Some(1));

        let mut pos = ParsePosition::new(0);
        assert!(cf.parse_at::<f64>("1 + xi", &mut pos).is_none());
        assert_eq!(pos.error_index, Some(4));
    }

    #[test]
    fn test_number_format_parse() {
        let english = NumberFormat::new(Locale::English);
        let french = NumberFormat::new(Locale::French);
        let mut custom = NumberFormat::new(Locale::English);
        custom.set_decimal_separator('·');

        let parse = |nf: &NumberFormat, source: &str| {
            let mut pos = ParsePosition::new(0);
            let value = nf.parse::<f64>(source, &mut pos);
            (value, pos.index, pos.error_index)
        };
        assert_eq!(parse(&english, "1.5x"), (Some(1.5), 3, None));
        assert_eq!(parse(&french, "1,5x"), (Some(1.5), 3, None));
        assert_eq!(parse(&french, "1.5"), (Some(1.0), 1, None));
        assert_eq!(parse(&english, "-.25"), (Some(-0.25), 4, None));
        assert_eq!(parse(&english, "7."), (Some(7.0), 2, None));
        assert_eq!(parse(&custom, "2·75"), (Some(2.75), "2·75".len(), None));
        assert_eq!(parse(&english, "2·75"), (Some(2.0), 1, None));
        assert_eq!(parse(&english, "-."), (None, 0, Some(0)));
        assert_eq!(parse(&french, " 1"), (None, 0, Some(0)));
    }

    #[test]
    fn test_parse_position_advances() {
        let cf = ComplexFormat::new();
        let source = "x = 2 - 3i;";
        let mut pos = ParsePosition::new(4);
        let calc: Complex64 = cf.parse_at(source, &mut pos).unwrap();
        assert_eq!(calc, Complex64::new(2.0, -3.0));
        assert_eq!(pos.index, 10);
        assert_eq!(pos.error_index, None);
    }

    #[test]
    fn test_from_str() {
        let z: Complex64 = "3 - 4i".parse().unwrap();
        assert_eq!(z, Complex64::new(3.0, -4.0));
        assert!("(1.0, -2.0)".parse::<Complex64>().is_err());
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("fr-FR").unwrap(), Locale::French);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!(Locale::from_str("German").unwrap().decimal_separator(), ',');
        assert!(Locale::from_str("klingon").is_err());
    }
}
