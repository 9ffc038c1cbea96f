use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::debug;

pub const PASSWORD_FILE_NAME: &str = "password.txt";

const SALT_LEN: usize = 16;

/// Password gate over the stored credential file. The raw secret is never
/// written out, only a single `hex(salt)$hex(sha256(salt || password))` line.
pub struct Credential {
    path: PathBuf,
}

impl Credential {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PASSWORD_FILE_NAME),
        }
    }

    /// Whether a password was already set up on this machine.
    pub async fn is_set(&self) -> Result<bool> {
        Ok(fs::try_exists(&self.path).await?)
    }

    pub async fn set(&self, password: &str) -> Result<()> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let line = format!(
            "{}${}",
            hex::encode(salt),
            hex::encode(digest(&salt, password))
        );
        fs::write(&self.path, line).await?;
        debug!("Stored credential at {:?}", self.path);
        Ok(())
    }

    /// Checks an attempt against the stored digest. A missing credential file
    /// is a hard error: the setup flow is the only path allowed to create it.
    pub async fn verify(&self, attempt: &str) -> Result<bool> {
        let stored = match fs::read_to_string(&self.path).await {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                bail!("No password has been set up. Run `urgeshield setup` first")
            }
            Err(e) => return Err(e.into()),
        };

        let (salt_hex, digest_hex) = stored
            .trim()
            .split_once('$')
            .context("Credential file is malformed")?;
        let salt = hex::decode(salt_hex).context("Credential file is malformed")?;

        Ok(hex::encode(digest(&salt, attempt)) == digest_hex)
    }
}

fn digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::Credential;

    #[tokio::test]
    async fn test_set_then_verify() -> Result<()> {
        let dir = tempdir()?;
        let credential = Credential::new(dir.path());

        assert!(!credential.is_set().await?);
        credential.set("hunter2").await?;
        assert!(credential.is_set().await?);

        assert!(credential.verify("hunter2").await?);
        assert!(!credential.verify("hunter3").await?);
        assert!(!credential.verify("").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_verify_without_setup_is_fatal() {
        let dir = tempdir().unwrap();
        let credential = Credential::new(dir.path());

        assert!(credential.verify("anything").await.is_err());
    }

    #[tokio::test]
    async fn test_stored_line_does_not_contain_the_secret() -> Result<()> {
        let dir = tempdir()?;
        let credential = Credential::new(dir.path());
        credential.set("correct horse battery staple").await?;

        let stored = tokio::fs::read_to_string(dir.path().join(super::PASSWORD_FILE_NAME)).await?;
        assert!(!stored.contains("correct horse"));
        assert!(stored.contains('$'));
        Ok(())
    }
}
