use crate::oid::to_dotted;

/// Resolves dotted object identifiers to human-readable names.
pub trait OidNameProvider {
    /// Name registered for `dotted`, if any.
    fn name(&self, dotted: &str) -> Option<&str>;
}

/// Arcs that show up in PE signatures and certificates.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("1.2.840.113549", "rsadsi"),
    ("1.2.840.113549.1.1.1", "rsaEncryption"),
    ("1.2.840.113549.1.1.5", "sha1WithRSAEncryption"),
    ("1.2.840.113549.1.1.11", "sha256WithRSAEncryption"),
    ("1.2.840.113549.1.7.1", "data"),
    ("1.2.840.113549.1.7.2", "signedData"),
    ("1.2.840.113549.1.9.3", "contentType"),
    ("1.2.840.113549.1.9.4", "messageDigest"),
    ("1.2.840.113549.1.9.5", "signingTime"),
    ("1.2.840.113549.1.9.6", "countersignature"),
    ("1.3.6.1.4.1.311.2.1.4", "SPC_INDIRECT_DATA_OBJID"),
    ("1.3.6.1.4.1.311.2.1.11", "SPC_STATEMENT_TYPE_OBJID"),
    ("1.3.6.1.4.1.311.2.1.12", "SPC_SP_OPUS_INFO_OBJID"),
    ("1.3.6.1.4.1.311.2.1.15", "SPC_PE_IMAGE_DATA_OBJID"),
    ("1.3.6.1.4.1.311.3.3.1", "SPC_RFC3161_OBJID"),
    ("1.3.14.3.2.26", "sha1"),
    ("2.16.840.1.101.3.4.2.1", "sha256"),
    ("2.16.840.1.101.3.4.2.2", "sha384"),
    ("2.16.840.1.101.3.4.2.3", "sha512"),
    ("2.5.4.3", "commonName"),
    ("2.5.4.6", "countryName"),
    ("2.5.4.10", "organizationName"),
];

/// Lookup over a static table of `(dotted, name)` pairs.
///
/// Caller-supplied entries are consulted before the built-in table, so they can override it.
///
/// ```rust
/// use rsrcscope::oid::{OidNameProvider, StaticOidNames};
///
/// let names = StaticOidNames::new(&[("1.3.6.1.4.1.311", "microsoft")]);
/// assert_eq!(names.name("1.3.6.1.4.1.311"), Some("microsoft"));
/// assert_eq!(names.name("1.3.14.3.2.26"), Some("sha1"));
/// assert_eq!(names.name("1.2.3"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticOidNames<'a> {
    custom: &'a [(&'a str, &'a str)],
    builtin: bool,
}

impl<'a> StaticOidNames<'a> {
    /// Custom entries backed by the built-in table.
    #[must_use]
    pub fn new(custom: &'a [(&'a str, &'a str)]) -> Self {
        StaticOidNames {
            custom,
            builtin: true,
        }
    }

    /// Only the custom entries.
    #[must_use]
    pub fn only(custom: &'a [(&'a str, &'a str)]) -> Self {
        StaticOidNames {
            custom,
            builtin: false,
        }
    }

    /// Only the built-in table.
    #[must_use]
    pub fn well_known() -> Self {
        StaticOidNames::new(&[])
    }
}

impl OidNameProvider for StaticOidNames<'_> {
    fn name(&self, dotted: &str) -> Option<&str> {
        find(self.custom, dotted).or_else(|| {
            if self.builtin {
                find(WELL_KNOWN, dotted)
            } else {
                None
            }
        })
    }
}

fn find<'t>(table: &'t [(&'t str, &'t str)], dotted: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(oid, _)| *oid == dotted)
        .map(|(_, name)| *name)
}

/// Dotted form of `arcs`, followed by the provider's name in parentheses when it has one.
///
/// ```rust
/// use rsrcscope::oid::{describe, StaticOidNames};
///
/// let names = StaticOidNames::well_known();
/// assert_eq!(describe(&[2, 5, 4, 3], &names), "2.5.4.3 (commonName)");
/// assert_eq!(describe(&[1, 2, 3], &names), "1.2.3");
/// ```
pub fn describe(arcs: &[u64], provider: &dyn OidNameProvider) -> String {
    let dotted = to_dotted(arcs);
    match provider.name(&dotted) {
        Some(name) => format!("{dotted} ({name})"),
        None => dotted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_overrides_builtin() {
        let names = StaticOidNames::new(&[("1.3.14.3.2.26", "SHA-1")]);
        assert_eq!(names.name("1.3.14.3.2.26"), Some("SHA-1"));
        assert_eq!(names.name("2.16.840.1.101.3.4.2.1"), Some("sha256"));
    }

    #[test]
    fn only_custom() {
        let names = StaticOidNames::only(&[("1.2.3", "test")]);
        assert_eq!(names.name("1.2.3"), Some("test"));
        assert_eq!(names.name("1.3.14.3.2.26"), None);
    }
}
