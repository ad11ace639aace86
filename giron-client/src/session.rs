/// Outcome of classifying the session state for a private route.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gate {
    /// Logged-in state not known yet; render a placeholder, decide nothing
    Loading,
    Authorized,
    /// Redirect to sign-in, preserving the requested path
    Unauthorized,
}

/// A route is authorized only when the logged-in flag is definitively true
/// and no 401/403 has been observed on any request.
pub fn gate(logged_in: Option<bool>, auth_rejected: bool) -> Gate {
    match logged_in {
        None => Gate::Loading,
        Some(true) if !auth_rejected => Gate::Authorized,
        Some(_) => Gate::Unauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_flag_decides_nothing() {
        assert_eq!(gate(None, false), Gate::Loading);
        assert_eq!(gate(None, true), Gate::Loading);
    }

    #[test]
    fn logged_out_redirects() {
        assert_eq!(gate(Some(false), false), Gate::Unauthorized);
    }

    #[test]
    fn auth_rejection_overrides_the_flag() {
        assert_eq!(gate(Some(true), true), Gate::Unauthorized);
    }

    #[test]
    fn logged_in_without_rejection_is_authorized() {
        assert_eq!(gate(Some(true), false), Gate::Authorized);
    }
}
