use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use snafu::ResultExt;

use crate::error::{Result, error::ParseJWTSnafu};

#[derive(Debug)]
pub struct BearerToken<'a>(&'a str);

impl<'a> BearerToken<'a> {
    pub fn token(&self) -> &'a str {
        self.0
    }

    /// Reads the token from an `Authorization: Bearer <token>` header.
    pub fn from_headers(headers: &'a HeaderMap) -> Result<Option<Self>> {
        Ok(headers
            .get(AUTHORIZATION)
            .map(|t| {
                t.to_str().context(ParseJWTSnafu).map(|s| {
                    s.split_once(' ')
                        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
                        .map(|(_, t)| t.trim())
                        .filter(|t| !t.is_empty())
                })
            })
            .transpose()?
            .flatten()
            .map(Self))
    }
}
