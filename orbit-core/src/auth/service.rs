//! Registration and login on top of the player repository.

use tracing::{info, warn};

use crate::auth::CredentialHasher;
use crate::config::AuthConfig;
use crate::error::{OrbitError, Result};
use crate::model::Player;
use crate::repository::{PlayerRepository, Repository};

/// Account operations. Owns the player repository so every account change
/// goes through the same in-memory mirror as gameplay updates.
#[derive(Debug)]
pub struct AuthService {
    players: PlayerRepository,
    hasher: CredentialHasher,
    min_password_length: usize,
}

impl AuthService {
    /// Wrap `players` with an explicit hasher and password policy.
    #[must_use]
    pub fn new(players: PlayerRepository, hasher: CredentialHasher, min_password_length: usize) -> Self {
        Self {
            players,
            hasher,
            min_password_length,
        }
    }

    /// Wrap `players` using the `[auth]` config section.
    ///
    /// # Errors
    ///
    /// [`OrbitError::Config`] if the hashing parameters are invalid.
    pub fn from_config(players: PlayerRepository, config: &AuthConfig) -> Result<Self> {
        let hasher = CredentialHasher::from_config(config)?;
        Ok(Self::new(players, hasher, config.min_password_length))
    }

    /// Create an account with default health, inventory and location.
    ///
    /// # Errors
    ///
    /// - [`OrbitError::InvalidCredentials`] for a blank username or a password
    ///   that is blank or too short. Nothing is written in that case.
    /// - [`OrbitError::DuplicateUsername`] if the exact username is taken.
    /// - Persistence errors from the repository.
    pub fn register(&mut self, username: &str, password: &str) -> Result<Player> {
        if username.trim().is_empty() {
            return Err(OrbitError::InvalidCredentials("username must not be empty".into()));
        }
        self.check_password(password)?;
        if self.players.find_by_username(username).is_some() {
            warn!(username, "Registration rejected: username taken");
            return Err(OrbitError::DuplicateUsername(username.to_string()));
        }

        let player = Player::new(username, &self.hasher.hash(password))?;
        let player = self.players.save(player)?;
        info!(username, count = self.players.count(), "Registered player");
        Ok(player)
    }

    /// Check credentials and return the stored player unchanged.
    ///
    /// # Errors
    ///
    /// [`OrbitError::InvalidCredentials`] if the username is unknown or the
    /// password does not match. Both cases produce the same message.
    pub fn login(&self, username: &str, password: &str) -> Result<Player> {
        let Some(player) = self.players.find_by_username(username) else {
            warn!(username, "Login rejected: unknown user");
            return Err(invalid_login());
        };
        if !self.hasher.verify(password, player.password_hash()) {
            warn!(username, "Login rejected: wrong password");
            return Err(invalid_login());
        }
        info!(username, "Player logged in");
        Ok(player)
    }

    /// Replace the password of `username` after checking the current one.
    ///
    /// # Errors
    ///
    /// [`OrbitError::InvalidCredentials`] if `old_password` is wrong or
    /// `new_password` breaks the password policy; persistence errors from
    /// the repository.
    pub fn change_password(&mut self, username: &str, old_password: &str, new_password: &str) -> Result<()> {
        let mut player = self.login(username, old_password)?;
        self.check_password(new_password)?;

        let Some(id) = player.id().cloned() else {
            return Err(OrbitError::NotFound {
                kind: "player",
                id: username.to_string(),
            });
        };
        player.set_password_hash(&self.hasher.hash(new_password))?;
        self.players.update(&id, player)?;
        info!(username, "Password changed");
        Ok(())
    }

    /// Exact-match username lookup.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<Player> {
        self.players.find_by_username(username)
    }

    /// The underlying repository.
    #[must_use]
    pub fn players(&self) -> &PlayerRepository {
        &self.players
    }

    /// Mutable access for persisting gameplay changes to players.
    pub fn players_mut(&mut self) -> &mut PlayerRepository {
        &mut self.players
    }

    fn check_password(&self, password: &str) -> Result<()> {
        if password.trim().is_empty() {
            return Err(OrbitError::InvalidCredentials("password must not be empty".into()));
        }
        if password.chars().count() < self.min_password_length {
            return Err(OrbitError::InvalidCredentials(format!(
                "password must be at least {} characters",
                self.min_password_length
            )));
        }
        Ok(())
    }
}

fn invalid_login() -> OrbitError {
    OrbitError::InvalidCredentials("invalid username or password".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> AuthService {
        let players = PlayerRepository::open(dir.path().join("players.json"));
        let hasher = CredentialHasher::new("test-salt", 100, 32).expect("hasher");
        AuthService::new(players, hasher, 6)
    }

    #[test]
    fn register_then_login() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);

        let registered = auth.register("alice", "secret1").expect("register");
        assert!(registered.id().is_some());
        assert_eq!(registered.health(), 100);
        assert_eq!(registered.inventory_size(), 10);
        assert!(registered.inventory().is_empty());
        assert_ne!(registered.password_hash(), "secret1");

        let logged_in = auth.login("alice", "secret1").expect("login");
        assert_eq!(logged_in.id(), registered.id());
        assert_eq!(logged_in, registered);
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);
        auth.register("alice", "secret1").expect("register");

        let wrong = auth.login("alice", "secret2").unwrap_err();
        let unknown = auth.login("bob", "secret1").unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert!(matches!(wrong, OrbitError::InvalidCredentials(_)));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);
        auth.register("alice", "secret1").expect("register");

        let err = auth.register("alice", "another1").unwrap_err();
        assert!(matches!(err, OrbitError::DuplicateUsername(ref u) if u == "alice"));
        assert!(auth.register("Alice", "another1").is_ok());
        assert_eq!(auth.players().count(), 2);
    }

    #[test]
    fn weak_credentials_never_reach_the_repository() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);

        for (user, pw) in [("alice", "12345"), ("alice", "      "), ("", "secret1"), ("  ", "secret1")] {
            let err = auth.register(user, pw).unwrap_err();
            assert!(matches!(err, OrbitError::InvalidCredentials(_)), "{user:?}/{pw:?}");
        }
        assert_eq!(auth.players().count(), 0);
        assert!(!dir.path().join("players.json").exists());
    }

    #[test]
    fn password_length_counts_characters() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);
        // Six characters, more than six bytes.
        auth.register("zoe", "ééééé1").expect("register");
        assert!(auth.register("yan", "éééé1").is_err());
    }

    #[test]
    fn change_password_requires_old_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);
        auth.register("alice", "secret1").expect("register");

        let err = auth.change_password("alice", "wrong!!", "newpass1").unwrap_err();
        assert!(matches!(err, OrbitError::InvalidCredentials(_)));
        let err = auth.change_password("alice", "secret1", "short").unwrap_err();
        assert!(matches!(err, OrbitError::InvalidCredentials(_)));

        auth.change_password("alice", "secret1", "newpass1").expect("change");
        assert!(auth.login("alice", "secret1").is_err());
        assert!(auth.login("alice", "newpass1").is_ok());
    }

    #[test]
    fn accounts_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let id = service(&dir)
            .register("alice", "secret1")
            .expect("register")
            .id()
            .cloned();

        let auth = service(&dir);
        assert_eq!(auth.login("alice", "secret1").expect("login").id().cloned(), id);
        assert!(auth.find_by_username("alice").is_some());
    }

    #[test]
    fn gameplay_updates_go_through_players_mut() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);
        let mut player = auth.register("alice", "secret1").expect("register");
        let id = player.id().expect("id").clone();

        player.set_health(42).expect("health");
        auth.players_mut().update(&id, player).expect("update");
        assert_eq!(service(&dir).login("alice", "secret1").expect("login").health(), 42);
    }

    #[test]
    fn renaming_onto_another_account_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut auth = service(&dir);
        auth.register("alice", "secret1").expect("register");
        let mut bob = auth.register("bob", "bobpass").expect("register");
        let bob_id = bob.id().expect("id").clone();

        bob.set_username("alice").expect("non-blank");
        let err = auth.players_mut().update(&bob_id, bob).unwrap_err();
        assert!(matches!(err, OrbitError::DuplicateUsername(_)));

        assert_eq!(auth.login("bob", "bobpass").expect("bob keeps access").id(), Some(&bob_id));
        assert!(auth.login("alice", "secret1").is_ok());
    }

    #[test]
    fn from_config_rejects_bad_parameters() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AuthConfig {
            iterations: 0,
            ..AuthConfig::default()
        };
        let players = PlayerRepository::open(dir.path().join("players.json"));
        assert!(matches!(AuthService::from_config(players, &config), Err(OrbitError::Config(_))));
    }
}
