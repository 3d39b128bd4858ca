//! Navigation-related state types.
//!
//! This module contains the views the application can show, the links that
//! lead between them, and the focus order of the registration form.

use super::form::Field;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Register,
    Login,
}

impl View {
    /// Returns the route path of the view.
    ///
    pub fn path(&self) -> &'static str {
        match self {
            View::Register => "/register",
            View::Login => "/login",
        }
    }
}

/// Specifying where a link leads.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LinkTarget {
    View(View),
    Inert,
}

/// Defines a link rendered in a view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub target: LinkTarget,
}

pub const SIGN_IN_LINK: Link = Link {
    label: "Sign in",
    target: LinkTarget::View(View::Login),
};

pub const PRIVACY_POLICY_LINK: Link = Link {
    label: "privacy policy",
    target: LinkTarget::Inert,
};

pub const TERMS_OF_SERVICE_LINK: Link = Link {
    label: "terms of service",
    target: LinkTarget::Inert,
};

/// Specifying the focusable elements of the registration view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Link(Link),
    Field(Field),
    Submit,
}

impl Focus {
    /// Focusable elements in tab order.
    pub const ORDER: [Focus; 10] = [
        Focus::Link(SIGN_IN_LINK),
        Focus::Field(Field::UserName),
        Focus::Field(Field::FirstName),
        Focus::Field(Field::LastName),
        Focus::Field(Field::Email),
        Focus::Field(Field::Password),
        Focus::Field(Field::Terms),
        Focus::Link(PRIVACY_POLICY_LINK),
        Focus::Link(TERMS_OF_SERVICE_LINK),
        Focus::Submit,
    ];

    fn position(&self) -> usize {
        Focus::ORDER
            .iter()
            .position(|focus| focus == self)
            .unwrap_or(0)
    }

    /// Return the element after this one, wrapping around.
    ///
    pub fn next(&self) -> Focus {
        Focus::ORDER[(self.position() + 1) % Focus::ORDER.len()]
    }

    /// Return the element before this one, wrapping around.
    ///
    pub fn previous(&self) -> Focus {
        let len = Focus::ORDER.len();
        Focus::ORDER[(self.position() + len - 1) % len]
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::UserName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_paths() {
        assert_eq!(View::Register.path(), "/register");
        assert_eq!(View::Login.path(), "/login");
    }

    #[test]
    fn test_links() {
        assert_eq!(SIGN_IN_LINK.target, LinkTarget::View(View::Login));
        assert_eq!(PRIVACY_POLICY_LINK.target, LinkTarget::Inert);
        assert_eq!(TERMS_OF_SERVICE_LINK.target, LinkTarget::Inert);
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::default();
        assert_eq!(focus, Focus::Field(Field::UserName));
        for _ in 0..Focus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Field(Field::UserName));

        assert_eq!(Focus::Submit.next(), Focus::Link(SIGN_IN_LINK));
        assert_eq!(Focus::Link(SIGN_IN_LINK).previous(), Focus::Submit);
        assert_eq!(
            Focus::Field(Field::Terms).next(),
            Focus::Link(PRIVACY_POLICY_LINK)
        );
    }
}
