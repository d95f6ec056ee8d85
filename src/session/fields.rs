//! The field store shared with the editing surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::RebrandError;
use crate::utils::{NOT_DETECTED, ORIGINAL_THEME};

/// Every user-visible field, named as the editing surface names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    BrandReplacement,
    SloganReplacement,
    LogoReplacement,
    CompanyReplacement,
    DetectedBrand,
    DetectedSlogan,
    DetectedLogo,
    DetectedCompany,
    ColorMode,
    FontFamily,
    BackgroundStyle,
    NavPosition,
    ThemeName,
    PrimaryColor,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::BrandReplacement,
        Field::SloganReplacement,
        Field::LogoReplacement,
        Field::CompanyReplacement,
        Field::DetectedBrand,
        Field::DetectedSlogan,
        Field::DetectedLogo,
        Field::DetectedCompany,
        Field::ColorMode,
        Field::FontFamily,
        Field::BackgroundStyle,
        Field::NavPosition,
        Field::ThemeName,
        Field::PrimaryColor,
    ];

    pub const REPLACEMENTS: [Field; 4] = [
        Field::BrandReplacement,
        Field::SloganReplacement,
        Field::LogoReplacement,
        Field::CompanyReplacement,
    ];

    pub const DETECTED: [Field; 4] = [
        Field::DetectedBrand,
        Field::DetectedSlogan,
        Field::DetectedLogo,
        Field::DetectedCompany,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::BrandReplacement => "brandReplacement",
            Field::SloganReplacement => "sloganReplacement",
            Field::LogoReplacement => "logoReplacement",
            Field::CompanyReplacement => "companyReplacement",
            Field::DetectedBrand => "detectedBrand",
            Field::DetectedSlogan => "detectedSlogan",
            Field::DetectedLogo => "detectedLogo",
            Field::DetectedCompany => "detectedCompany",
            Field::ColorMode => "colorMode",
            Field::FontFamily => "fontFamily",
            Field::BackgroundStyle => "backgroundStyle",
            Field::NavPosition => "navPosition",
            Field::ThemeName => "themeName",
            Field::PrimaryColor => "primaryColor",
        }
    }

    /// Value a fresh session starts with
    #[must_use]
    pub fn initial_value(self) -> &'static str {
        match self {
            Field::DetectedBrand
            | Field::DetectedSlogan
            | Field::DetectedLogo
            | Field::DetectedCompany => NOT_DETECTED,
            Field::ColorMode => "solid",
            Field::BackgroundStyle | Field::NavPosition => "default",
            Field::ThemeName => ORIGINAL_THEME,
            _ => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RebrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RebrandError::Config(format!("unknown field '{s}'")))
    }
}

/// Field → current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldStore {
    values: BTreeMap<Field, String>,
}

impl Default for FieldStore {
    fn default() -> Self {
        Self {
            values: Field::ALL
                .into_iter()
                .map(|field| (field, field.initial_value().to_string()))
                .collect(),
        }
    }
}

impl FieldStore {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Value, or `None` when blank
    #[must_use]
    pub fn non_empty(&self, field: Field) -> Option<&str> {
        Some(self.get(field).trim()).filter(|v| !v.is_empty())
    }

    pub fn clear_replacements(&mut self) {
        for field in Field::REPLACEMENTS {
            self.set(field, "");
        }
    }

    pub fn reset_detected(&mut self) {
        for field in Field::DETECTED {
            self.set(field, NOT_DETECTED);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}
