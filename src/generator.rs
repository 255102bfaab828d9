// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the configured template into Kubernetes objects.

use crate::config::Config;
use crate::constants::template::RANDOM_NAME;
use crate::error::{LoadgenError, Result};
use crate::random::generate_random_name;
use crate::template::{Template, TemplateData};
use kube::core::{DynamicObject, GroupVersionKind};
use kube::discovery::ApiResource;
use tracing::debug;

/// A Kubernetes object rendered from the template, ready to be submitted
#[derive(Debug, Clone)]
pub struct RenderedObject {
    object: DynamicObject,
}

impl RenderedObject {
    /// Parse rendered YAML text into an object
    pub fn from_yaml(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_yaml::from_str(text)?;
        let object = serde_json::from_value(value)
            .map_err(|e| LoadgenError::InvalidObject(e.to_string()))?;
        Ok(Self { object })
    }

    pub fn kind(&self) -> &str {
        self.object
            .types
            .as_ref()
            .map(|t| t.kind.as_str())
            .unwrap_or_default()
    }

    pub fn api_version(&self) -> &str {
        self.object
            .types
            .as_ref()
            .map(|t| t.api_version.as_str())
            .unwrap_or_default()
    }

    /// Group and version from `apiVersion`; the core group is `""`
    pub fn group_version(&self) -> (&str, &str) {
        let api_version = self.api_version();
        api_version.split_once('/').unwrap_or(("", api_version))
    }

    pub fn name(&self) -> &str {
        self.object.metadata.name.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.object.metadata.namespace.as_deref()
    }

    /// Resource to submit this object under, using `plural` instead of deriving it from the kind
    pub fn api_resource(&self, plural: &str) -> Result<ApiResource> {
        if self.kind().is_empty() || self.api_version().is_empty() {
            return Err(LoadgenError::InvalidObject(format!(
                "object {} has no apiVersion or kind",
                self.name()
            )));
        }
        if plural.is_empty() {
            return Err(LoadgenError::InvalidObject(format!(
                "no resource configured for {}/{}",
                self.kind(),
                self.name()
            )));
        }

        let (group, version) = self.group_version();
        let gvk = GroupVersionKind::gvk(group, version, self.kind());
        Ok(ApiResource::from_gvk_with_plural(&gvk, plural))
    }

    pub fn as_dynamic(&self) -> &DynamicObject {
        &self.object
    }
}

impl Config {
    /// Render the template with a freshly generated random name
    pub fn generate_object(&self) -> Result<RenderedObject> {
        let random_name = generate_random_name(
            &self.randomization.name_prefix,
            self.randomization.suffix_length,
        );
        self.render_object(&random_name)
    }

    /// Render the template with `random_name` bound to the name placeholder
    pub fn render_object(&self, random_name: &str) -> Result<RenderedObject> {
        let template = self.parse_template()?;
        let rendered = template.render(&TemplateData {
            random_name: random_name.to_string(),
        })?;
        debug!("Rendered object:\n{}", rendered);

        RenderedObject::from_yaml(&rendered)
    }

    /// Whether the template contains the random name placeholder
    pub fn references_random_name(&self) -> Result<bool> {
        Ok(self.parse_template()?.references(RANDOM_NAME))
    }

    fn parse_template(&self) -> Result<Template> {
        let source = serde_yaml::to_string(&self.template)?;
        Template::parse(&source)
    }
}
