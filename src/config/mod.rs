use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// Currency all seeded prices and derived totals are quoted in.
    pub base_currency: String,

    // Demo data
    pub demo_user_id: String,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            base_currency: env::var("BASE_CURRENCY").unwrap_or_else(|_| "USD".into()),
            demo_user_id: env::var("DEMO_USER_ID").unwrap_or_else(|_| "demo".into()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .unwrap_or(true),
        })
    }
}
