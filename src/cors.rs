use actix_cors::Cors;

/// Seconds browsers may cache a preflight answer.
pub const PREFLIGHT_MAX_AGE: usize = 600;

/// # Cross-Origin Policy
///
/// Permissive CORS applied to every route: any origin, any method, any
/// header, credentials allowed.
///
/// Browsers refuse a literal `*` origin on credentialed responses, so the
/// request's `Origin` is echoed back in `Access-Control-Allow-Origin`
/// instead. Preflight `OPTIONS` requests are answered here and never reach
/// the route handlers.
pub fn permissive() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE)
}
