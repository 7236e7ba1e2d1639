//! Explicit authentication context for the booking client.
//!
//! The session is a plain value populated at login, cleared at logout, and
//! read by whatever issues authenticated requests. Keeping it explicit (rather
//! than ambient global state) keeps slot generation and booking logic testable
//! in isolation.
//!
//! Token decoding is deliberately permissive: the payload segment of the JWT
//! is base64url-decoded and JSON-parsed without signature verification — the
//! client only uses it for role gating in the UI, and the server re-checks
//! every request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Backend role strings, kept verbatim for wire compatibility.
pub const ROLE_CLIENT: &str = "cliente";
pub const ROLE_BARBER: &str = "barbero";
pub const ROLE_ADMIN: &str = "admin";

/// The role carried in a token's claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Client,
    Barber,
    Admin,
}

impl Role {
    /// Parse a backend role string. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            ROLE_CLIENT => Some(Role::Client),
            ROLE_BARBER => Some(Role::Barber),
            ROLE_ADMIN => Some(Role::Admin),
            _ => None,
        }
    }

    /// The wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => ROLE_CLIENT,
            Role::Barber => ROLE_BARBER,
            Role::Admin => ROLE_ADMIN,
        }
    }
}

/// The claims the client reads from an access token's payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user id, issued as a string. Absent in some tokens;
    /// the session then carries role claims without a user id.
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Any malformed token (wrong segment count, bad base64url, bad JSON) yields
/// `None` rather than an error, mirroring the "treat as logged out" behavior
/// the UI expects.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    // Some issuers pad the segment; standard JWT base64url is unpadded.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Process-wide authentication context for the booking client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user_id: Option<i64>,
    role: Option<Role>,
    is_admin: bool,
}

impl Session {
    /// A logged-out session.
    pub fn anonymous() -> Session {
        Session::default()
    }

    /// Build a session from an access token.
    ///
    /// An undecodable token produces an anonymous session — never an error.
    pub fn from_token(token: &str) -> Session {
        let Some(claims) = decode_claims(token) else {
            return Session::anonymous();
        };
        Session {
            token: Some(token.to_string()),
            user_id: claims.sub.as_deref().and_then(|s| s.parse().ok()),
            role: claims.role.as_deref().and_then(Role::parse),
            is_admin: claims.is_admin,
        }
    }

    /// Drop all credentials, returning to the logged-out state.
    pub fn clear(&mut self) {
        *self = Session::anonymous();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Admin access comes from the dedicated claim or the admin role.
    pub fn is_admin(&self) -> bool {
        self.is_admin || self.role == Some(Role::Admin)
    }

    pub fn is_barber(&self) -> bool {
        self.role == Some(Role::Barber)
    }

    /// The `Authorization` header value for authenticated requests, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}
