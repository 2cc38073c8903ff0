//! Configuration key paths consumed during startup.

/// Primary storage connection string.
pub const DEFAULT_CONNECTION_STRING: &str = "ConnectionStrings:DefaultConnectionString";

/// Section holding the frequently-bought-together recommendation keys.
pub const RECOMMENDATIONS_SECTION: &str = "Keys:AzureMLFrequentlyBoughtTogether";
/// Account key, relative to [`RECOMMENDATIONS_SECTION`].
pub const RECOMMENDATIONS_ACCOUNT_KEY: &str = "AccountKey";
/// Model name, relative to [`RECOMMENDATIONS_SECTION`].
pub const RECOMMENDATIONS_MODEL_NAME: &str = "ModelName";
/// Optional service endpoint override, relative to [`RECOMMENDATIONS_SECTION`].
pub const RECOMMENDATIONS_ENDPOINT: &str = "Endpoint";
/// Endpoint used when no override is configured.
pub const DEFAULT_RECOMMENDATIONS_ENDPOINT: &str =
    "https://api.datamarket.azure.com/data.ashx/amla/mba/v1/Score";

/// Job queue storage connection string (job runner).
pub const JOBS_STORAGE_CONNECTION_STRING: &str = "Data:AzureWebJobsStorage:ConnectionString";
/// Database connection string (job runner).
pub const JOBS_DATABASE_CONNECTION_STRING: &str = "Data:DefaultConnection:ConnectionString";

/// Website presentation options.
pub const WEBSITE_OPTIONS_SECTION: &str = "WebsiteOptions";
/// Application Insights keys.
pub const APPLICATION_INSIGHTS_SECTION: &str = "Keys:ApplicationInsights";
/// Content delivery network settings.
pub const CDN_SECTION: &str = "CDN";
/// External login provider settings.
pub const AUTHENTICATION_SECTION: &str = "Authentication";
