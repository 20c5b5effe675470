use std::fmt;

/// HTTP status codes the server can emit.
///
/// - `Ok` (200): File served, or OPTIONS answered
/// - `Forbidden` (403): URI resolved outside the document root
/// - `NotFound` (404): No file behind the URI
/// - `NotImplemented` (501): Method outside the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

/// Returned when a numeric code has no entry in the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub u16);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no reason phrase registered for status {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use crude_server::http::status::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the canonical reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            403 => Ok(StatusCode::Forbidden),
            404 => Ok(StatusCode::NotFound),
            501 => Ok(StatusCode::NotImplemented),
            other => Err(UnknownStatus(other)),
        }
    }
}

/// Looks up the reason phrase for a numeric code.
///
/// Codes outside the table yield `None`; the serializer only accepts
/// [`StatusCode`] values, so such a code never reaches the wire.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    StatusCode::try_from(code).ok().map(|s| s.reason_phrase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_lookup_matches_enum() {
        for status in [
            StatusCode::Ok,
            StatusCode::Forbidden,
            StatusCode::NotFound,
            StatusCode::NotImplemented,
        ] {
            assert_eq!(StatusCode::try_from(status.as_u16()), Ok(status));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(StatusCode::try_from(418), Err(UnknownStatus(418)));
        assert_eq!(reason_phrase(500), None);
    }
}
