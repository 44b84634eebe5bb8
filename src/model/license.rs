//! License data structures.
//!
//! A component's licenses are either a disjunctive list of identified/named
//! licenses or a single SPDX expression. Mixed sets can still be constructed;
//! the normalizers reduce them to the first expression.

use std::fmt;

/// How a license was established for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseAcknowledgement {
    Declared,
    Concluded,
}

impl LicenseAcknowledgement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Declared => "declared",
            Self::Concluded => "concluded",
        }
    }
}

impl fmt::Display for LicenseAcknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw SPDX license expression, e.g. `MIT OR Apache-2.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseExpression {
    pub expression: String,
    pub acknowledgement: Option<LicenseAcknowledgement>,
}

impl LicenseExpression {
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            acknowledgement: None,
        }
    }

    /// Whether the `spdx` crate can parse this expression (lax mode)
    #[must_use]
    pub fn is_valid_spdx(&self) -> bool {
        !self.expression.is_empty()
            && spdx::Expression::parse_mode(&self.expression, spdx::ParseMode::LAX).is_ok()
    }
}

/// License identified by an SPDX license id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpdxLicense {
    pub id: String,
    pub url: Option<String>,
    pub acknowledgement: Option<LicenseAcknowledgement>,
}

impl SpdxLicense {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: None,
            acknowledgement: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// License identified only by free text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedLicense {
    pub name: String,
    pub url: Option<String>,
    pub acknowledgement: Option<LicenseAcknowledgement>,
}

impl NamedLicense {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            acknowledgement: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A license entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum License {
    Expression(LicenseExpression),
    Spdx(SpdxLicense),
    Named(NamedLicense),
}

impl License {
    /// Shorthand for an expression license
    #[must_use]
    pub fn expression(expression: impl Into<String>) -> Self {
        Self::Expression(LicenseExpression::new(expression))
    }

    /// Shorthand for an SPDX-identified license
    #[must_use]
    pub fn spdx(id: impl Into<String>) -> Self {
        Self::Spdx(SpdxLicense::new(id))
    }

    /// Shorthand for a named license
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedLicense::new(name))
    }

    #[must_use]
    pub const fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }

    #[must_use]
    pub const fn acknowledgement(&self) -> Option<LicenseAcknowledgement> {
        match self {
            Self::Expression(l) => l.acknowledgement,
            Self::Spdx(l) => l.acknowledgement,
            Self::Named(l) => l.acknowledgement,
        }
    }

    /// Attach an acknowledgement to any variant
    #[must_use]
    pub fn acknowledged(mut self, acknowledgement: LicenseAcknowledgement) -> Self {
        match &mut self {
            Self::Expression(l) => l.acknowledgement = Some(acknowledgement),
            Self::Spdx(l) => l.acknowledgement = Some(acknowledgement),
            Self::Named(l) => l.acknowledgement = Some(acknowledgement),
        }
        self
    }
}

/// Ordered collection of licenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseRepository {
    licenses: Vec<License>,
}

impl LicenseRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding exactly one expression
    #[must_use]
    pub fn from_expression(expression: LicenseExpression) -> Self {
        Self {
            licenses: vec![License::Expression(expression)],
        }
    }

    pub fn add(&mut self, license: License) {
        self.licenses.push(license);
    }

    #[must_use]
    pub fn with(mut self, license: License) -> Self {
        self.add(license);
        self
    }

    /// The first expression in the set, if any
    #[must_use]
    pub fn first_expression(&self) -> Option<&LicenseExpression> {
        self.licenses.iter().find_map(|l| match l {
            License::Expression(expr) => Some(expr),
            _ => None,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, License> {
        self.licenses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

impl FromIterator<License> for LicenseRepository {
    fn from_iter<I: IntoIterator<Item = License>>(iter: I) -> Self {
        Self {
            licenses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LicenseRepository {
    type Item = &'a License;
    type IntoIter = std::slice::Iter<'a, License>;

    fn into_iter(self) -> Self::IntoIter {
        self.licenses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_expression() {
        let repo = LicenseRepository::new()
            .with(License::spdx("MIT"))
            .with(License::expression("Apache-2.0 OR MIT"))
            .with(License::expression("GPL-2.0-only"));

        assert_eq!(
            repo.first_expression().map(|e| e.expression.as_str()),
            Some("Apache-2.0 OR MIT")
        );
    }

    #[test]
    fn test_expression_validity() {
        assert!(LicenseExpression::new("MIT OR Apache-2.0").is_valid_spdx());
        assert!(!LicenseExpression::new("").is_valid_spdx());
    }

    #[test]
    fn test_acknowledged() {
        let license = License::named("Custom").acknowledged(LicenseAcknowledgement::Concluded);
        assert_eq!(
            license.acknowledgement(),
            Some(LicenseAcknowledgement::Concluded)
        );
    }
}
