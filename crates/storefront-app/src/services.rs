//! Services handed to the website once startup has resolved.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use storefront_bootstrap::keys::{
    APPLICATION_INSIGHTS_SECTION, AUTHENTICATION_SECTION, CDN_SECTION, WEBSITE_OPTIONS_SECTION,
};
use storefront_bootstrap::{ResolvedBootstrapConfig, StorageBackend};
use storefront_config::{ConfigSection, Configuration};
use storefront_recommendations::RecommendationEngine;

/// Configuration sections consumed by site features.
///
/// Features receive the section they need from here instead of reading a
/// process-wide static.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSections {
    website_options: ConfigSection,
    application_insights: ConfigSection,
    cdn: ConfigSection,
    authentication: ConfigSection,
}

impl SiteSections {
    /// Extract every site section from `config`.
    #[must_use]
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            website_options: config.section(WEBSITE_OPTIONS_SECTION),
            application_insights: config.section(APPLICATION_INSIGHTS_SECTION),
            cdn: config.section(CDN_SECTION),
            authentication: config.section(AUTHENTICATION_SECTION),
        }
    }

    /// `WebsiteOptions` section.
    #[must_use]
    pub const fn website_options(&self) -> &ConfigSection {
        &self.website_options
    }

    /// `Keys:ApplicationInsights` section.
    #[must_use]
    pub const fn application_insights(&self) -> &ConfigSection {
        &self.application_insights
    }

    /// `CDN` section.
    #[must_use]
    pub const fn cdn(&self) -> &ConfigSection {
        &self.cdn
    }

    /// `Authentication` section.
    #[must_use]
    pub const fn authentication(&self) -> &ConfigSection {
        &self.authentication
    }

    /// Which sections carry at least one key.
    #[must_use]
    pub fn presence(&self) -> SectionPresence {
        SectionPresence {
            website_options: self.website_options.has_values(),
            application_insights: self.application_insights.has_values(),
            cdn: self.cdn.has_values(),
            authentication: self.authentication.has_values(),
        }
    }
}

/// Presence flags for [`SiteSections`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SectionPresence {
    /// `WebsiteOptions` has keys.
    pub website_options: bool,
    /// `Keys:ApplicationInsights` has keys.
    pub application_insights: bool,
    /// `CDN` has keys.
    pub cdn: bool,
    /// `Authentication` has keys.
    pub authentication: bool,
}

/// Resolved services for the lifetime of the website process.
#[derive(Clone)]
pub struct AppServices {
    resolved: Arc<ResolvedBootstrapConfig>,
    recommendations: Arc<dyn RecommendationEngine>,
    sections: SiteSections,
}

impl AppServices {
    /// Bundle resolved services.
    #[must_use]
    pub fn new(
        resolved: Arc<ResolvedBootstrapConfig>,
        recommendations: Arc<dyn RecommendationEngine>,
        sections: SiteSections,
    ) -> Self {
        Self {
            resolved,
            recommendations,
            sections,
        }
    }

    /// Startup choices the services were built from.
    #[must_use]
    pub fn resolved(&self) -> &ResolvedBootstrapConfig {
        &self.resolved
    }

    /// Selected storage backend.
    #[must_use]
    pub fn storage(&self) -> &StorageBackend {
        &self.resolved.storage
    }

    /// Recommendation engine matching the selected backend.
    #[must_use]
    pub fn recommendation_engine(&self) -> Arc<dyn RecommendationEngine> {
        Arc::clone(&self.recommendations)
    }

    /// Site configuration sections.
    #[must_use]
    pub const fn sections(&self) -> &SiteSections {
        &self.sections
    }

    /// Secret-free summary printed by the `resolve` command.
    #[must_use]
    pub fn summary(&self) -> ResolutionSummary<'_> {
        ResolutionSummary {
            resolved: &self.resolved,
            sections: self.sections.presence(),
        }
    }
}

impl fmt::Debug for AppServices {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppServices")
            .field("resolved", &self.resolved)
            .field("sections", &self.sections.presence())
            .finish_non_exhaustive()
    }
}

/// Serializable view of the resolved startup state.
#[derive(Debug, Serialize)]
pub struct ResolutionSummary<'a> {
    #[serde(flatten)]
    resolved: &'a ResolvedBootstrapConfig,
    sections: SectionPresence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_bootstrap::{RecommendationBackend, RuntimeEnvironment};
    use storefront_recommendations::EmptyRecommendationEngine;

    fn services(config: &Configuration) -> AppServices {
        AppServices::new(
            Arc::new(ResolvedBootstrapConfig {
                storage: StorageBackend::InMemory,
                recommendations: RecommendationBackend::NoOp,
                runtime: RuntimeEnvironment::standard(),
            }),
            Arc::new(EmptyRecommendationEngine),
            SiteSections::from_config(config),
        )
    }

    #[test]
    fn sections_are_scoped_to_their_keys() {
        let config = Configuration::from_pairs([
            ("CDN:Images", "https://cdn.example/images"),
            ("Keys:ApplicationInsights:InstrumentationKey", "ikey"),
            ("Keys:AzureMLFrequentlyBoughtTogether:AccountKey", "secret"),
        ]);
        let sections = SiteSections::from_config(&config);

        assert_eq!(sections.cdn().lookup("Images"), Some("https://cdn.example/images"));
        assert_eq!(
            sections.application_insights().lookup("InstrumentationKey"),
            Some("ikey")
        );
        assert_eq!(sections.application_insights().lookup("AccountKey"), None);
        assert_eq!(
            sections.presence(),
            SectionPresence {
                website_options: false,
                application_insights: true,
                cdn: true,
                authentication: false,
            }
        );
    }

    #[test]
    fn summary_flattens_resolution_and_presence() -> Result<(), serde_json::Error> {
        let config = Configuration::from_pairs([("WebsiteOptions:ShowWelcomePage", "true")]);
        let services = services(&config);
        assert_eq!(services.storage(), &StorageBackend::InMemory);

        let value = serde_json::to_value(services.summary())?;
        assert_eq!(
            value,
            json!({
                "storage": { "kind": "in_memory" },
                "recommendations": { "kind": "no_op" },
                "runtime": { "alternate_runtime": false },
                "sections": {
                    "website_options": true,
                    "application_insights": false,
                    "cdn": false,
                    "authentication": false
                }
            })
        );
        Ok(())
    }
}
