//
//  cloudinary-admin
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Admin API requests are authenticated in one of two ways:
//!
//! - **Basic**: HTTP Basic authentication with the account's API key and
//!   secret. This is the default.
//! - **OAuth**: a bearer token. When a token is configured it takes
//!   precedence over the key and secret.
//!
//! ## Example
//!
//! ```rust
//! use cloudinary_admin::auth::AuthCredential;
//!
//! let credential = AuthCredential::basic("123456789012345", "abcd");
//! assert!(!credential.is_oauth());
//!
//! let credential = AuthCredential::oauth("eyJhbGciOi");
//! assert!(credential.is_oauth());
//! ```

use std::fmt;

use reqwest::RequestBuilder;

/// Credentials attached to every Admin API request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// API key and secret, sent with HTTP Basic authentication.
    Basic {
        /// The account's API key.
        api_key: String,
        /// The account's API secret.
        api_secret: String,
    },
    /// OAuth bearer token.
    OAuth {
        /// The access token.
        token: String,
    },
}

impl AuthCredential {
    pub fn basic(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::Basic {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn oauth(token: impl Into<String>) -> Self {
        Self::OAuth {
            token: token.into(),
        }
    }

    pub fn is_oauth(&self) -> bool {
        matches!(self, Self::OAuth { .. })
    }

    /// Applies the credential to an HTTP request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cloudinary_admin::auth::AuthCredential;
    /// use reqwest::Client;
    ///
    /// async fn ping(credential: &AuthCredential) {
    ///     let client = Client::new();
    ///     let request = client.get("https://api.cloudinary.com/v1_1/demo/ping");
    ///     let response = credential.apply_to_request(request).send().await;
    /// }
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic {
                api_key,
                api_secret,
            } => request.basic_auth(api_key, Some(api_secret)),
            Self::OAuth { token } => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { api_key, .. } => f
                .debug_struct("Basic")
                .field("api_key", api_key)
                .field("api_secret", &"***")
                .finish(),
            Self::OAuth { .. } => f.debug_struct("OAuth").field("token", &"***").finish(),
        }
    }
}
