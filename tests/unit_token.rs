use rentcar_auth::{Identity, TokenService};
use rentcar_config::JwtConfig;
use rentcar_core::{ApplicationError, RoleName};

fn service(secret: &str, expires_in: Option<u64>) -> TokenService {
    TokenService::new(&JwtConfig {
        secret: secret.to_string(),
        expires_in,
    })
}

#[test]
fn test_round_trip_for_varied_identities() {
    let tokens = service("Rahasia", None);

    let identities = [
        Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin),
        Identity::new(2, "asep123", "asep@gmail.com", RoleName::Customer),
        Identity::new(i32::MAX, "Ñame with spaces", "x+tag@example.co.id", RoleName::Customer),
    ];

    for identity in identities {
        let token = tokens.issue(&identity).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), identity);
    }
}

#[test]
fn test_round_trip_with_expiry() {
    let tokens = service("Rahasia", Some(3600));
    let identity = Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin);

    let token = tokens.issue(&identity).unwrap();
    assert_eq!(tokens.verify(&token).unwrap(), identity);
}

#[test]
fn test_tokens_are_three_part_jwts() {
    let tokens = service("Rahasia", None);
    let token = tokens
        .issue(&Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin))
        .unwrap();

    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_verify_failures_are_invalid_token() {
    let tokens = service("Rahasia", None);
    let other = service("NotRahasia", None);
    let foreign = other
        .issue(&Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin))
        .unwrap();

    for token in ["", "abc", "a.b.c", foreign.as_str()] {
        let err = tokens.verify(token).unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidToken), "{:?}", token);
        assert_eq!(err.status(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
