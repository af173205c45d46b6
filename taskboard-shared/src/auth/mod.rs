/// Authentication and authorization utilities
///
/// This module provides the secure authentication primitives for Taskboard:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Session token generation and validation
/// - [`middleware`]: Axum middleware enforcing the authenticated and
///   admin-only policies
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Session Tokens**: HS256 signing with a fixed 1 hour expiration
/// - **Constant-time Comparison**: Password verification uses constant-time
///   operations

pub mod jwt;
pub mod middleware;
pub mod password;
