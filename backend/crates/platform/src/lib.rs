//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (MD5 hex digests, random secrets)
//! - Password hashing (Argon2id) and the password length policy

pub mod crypto;
pub mod password;
