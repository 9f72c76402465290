//! Campus email checks.
//!
//! Signups are restricted to school addresses. Domain matching (rather than
//! an exact comparison) deliberately admits subdomains such as
//! `student.fullsail.edu`.

/// Email domains accepted at signup.
#[derive(Debug, Clone)]
pub struct AllowedDomains {
    suffixes: Vec<String>,
}

impl Default for AllowedDomains {
    fn default() -> Self {
        Self::new(["fullsail.edu", "fullsail.com"])
    }
}

impl AllowedDomains {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(|s| s.into().to_lowercase()).collect(),
        }
    }

    /// True when the address belongs to an allowed domain or a subdomain
    /// of one. A bare suffix check would also admit lookalike domains like
    /// `notfullsail.edu`, so the match is anchored at `@` or a dot.
    pub fn is_allowed(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        let Some((_, domain)) = email.rsplit_once('@') else {
            return false;
        };
        self.suffixes.iter().any(|suffix| {
            domain == *suffix
                || domain
                    .strip_suffix(suffix)
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}
