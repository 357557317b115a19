//! Demonstrates using a dedicated TypeStore as a service locator.
//!
//! Components share one store handle and pull their dependencies out by
//! key, without every component knowing about every type. Cloning the
//! store clones the handle, not the contents.
//!
//! Run with: cargo run --example service_locator

use sovran_store::{StoreError, TypeStore};

#[derive(Clone, Debug)]
struct DatabaseConfig {
    host: String,
    port: u16,
    database: String,
}

#[derive(Clone, Debug)]
struct AppConfig {
    name: String,
    debug: bool,
}

#[derive(Clone, Debug)]
struct Logger {
    prefix: String,
}

impl Logger {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn log(&self, message: &str) {
        println!("[{}] {}", self.prefix, message);
    }
}

struct UserService {
    services: TypeStore,
}

impl UserService {
    fn new(services: TypeStore) -> Self {
        Self { services }
    }

    fn create_user(&self, username: &str) -> Result<(), StoreError> {
        self.services.with("logger", |logger: &Logger| {
            logger.log(&format!("Creating user: {}", username));
        })?;

        self.services.with("db", |db: &DatabaseConfig| {
            println!(
                "  -> Would insert into {}.users on {}:{}",
                db.database, db.host, db.port
            );
        })?;

        self.services.with("app", |cfg: &AppConfig| {
            if cfg.debug {
                println!("  -> [DEBUG] User {} created successfully", username);
            }
        })?;

        Ok(())
    }
}

fn main() -> Result<(), StoreError> {
    // Create the service container and register services
    let services = TypeStore::new();

    services.set(
        "db",
        DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            database: "myapp".to_string(),
        },
    );

    services.set(
        "app",
        AppConfig {
            name: "MyApp".to_string(),
            debug: true,
        },
    );

    services.set("logger", Logger::new("app"));

    // Components get their own handle to the same container
    let user_service = UserService::new(services.clone());

    user_service.create_user("alice")?;
    user_service.create_user("bob")?;

    // Reconfigure in place
    services.with_mut("app", |cfg: &mut AppConfig| {
        cfg.debug = false;
        println!("Debug mode disabled");
    })?;

    println!("\nFinal configuration:");
    services.with("app", |cfg: &AppConfig| {
        println!("  App: {}", cfg.name);
        println!("  Debug: {}", cfg.debug);
    })?;

    services.with("db", |cfg: &DatabaseConfig| {
        println!("  Database: {}:{}/{}", cfg.host, cfg.port, cfg.database);
    })?;

    Ok(())
}
