use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| e.to_string())?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| e.to_string())?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// The single password every account logs in with, held only as a hash.
#[derive(Clone)]
pub struct SharedPassword {
    hash: String,
}

impl SharedPassword {
    pub fn new(plain: &str) -> Result<Self, String> {
        Ok(Self { hash: hash_password(plain)? })
    }

    pub fn verify(&self, candidate: &str) -> bool {
        match verify_password(candidate, &self.hash) {
            Ok(ok) => ok,
            Err(e) => {
                log::error!("Stored password hash is unusable: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_password_accepts_only_the_original() {
        let pw = SharedPassword::new("1234").unwrap();
        assert!(pw.verify("1234"));
        assert!(!pw.verify("12345"));
        assert!(!pw.verify(""));
    }
}
