//! Manifest rendering
//!
//! Produces the two descriptor documents the game loader reads from the
//! outer archive: `content.xml` (which archives to mount and which map they
//! belong to) and `setup2.xml` (device name, change set groups, timestamp).
//!
//! Identifiers come from `NameSet`, whose character set needs no XML
//! escaping, so values are inserted as-is.

use chrono::NaiveDateTime;

use super::template::{Template, TemplateValues};
use crate::domain::value_objects::NameSet;
use crate::error::{MapDlcError, MapDlcResult};

pub const DLC_NAME_LOWER: &str = "DLC_NAME_LOWER";
pub const DLC_NAME_UPPER: &str = "DLC_NAME_UPPER";
pub const MAPPING_BASE_NAME_LOWER: &str = "MAPPING_BASE_NAME_LOWER";
pub const MAPPING_BASE_NAME_UPPER: &str = "MAPPING_BASE_NAME_UPPER";
pub const LEVEL_NAME_HASH: &str = "LEVEL_NAME_HASH";
pub const ARCHIVE_EXT: &str = "ARCHIVE_EXT";
pub const TIMESTAMP_PLACEHOLDER: &str = "TIMESTAMP_PLACEHOLDER";

/// Placeholders a content manifest template may reference
pub const CONTENT_PLACEHOLDERS: &[&str] = &[
    DLC_NAME_LOWER,
    DLC_NAME_UPPER,
    MAPPING_BASE_NAME_LOWER,
    MAPPING_BASE_NAME_UPPER,
    LEVEL_NAME_HASH,
    ARCHIVE_EXT,
];

/// Placeholders a setup manifest template may reference
pub const SETUP_PLACEHOLDERS: &[&str] = &[
    DLC_NAME_UPPER,
    MAPPING_BASE_NAME_LOWER,
    MAPPING_BASE_NAME_UPPER,
    TIMESTAMP_PLACEHOLDER,
];

/// `month/day/year hour:minute:second AM|PM`, independent of locale
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

pub const BUILTIN_CONTENT_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CDataFileMgr__ContentsOfDataFileXml>
  <disabledFiles />
  <includedXmlFiles />
  <includedDataFiles />
  <dataFiles>
    <Item>
      <filename>{{DLC_NAME_LOWER}}:/%PLATFORM%/{{MAPPING_BASE_NAME_LOWER}}.{{ARCHIVE_EXT}}</filename>
      <fileType>RPF_FILE</fileType>
      <overlay value="false" />
      <disabled value="true" />
      <persistent value="true" />
    </Item>
  </dataFiles>
  <contentChangeSets>
    <Item>
      <changeSetName>{{DLC_NAME_UPPER}}_AUTOGEN</changeSetName>
      <filesToDisable />
      <filesToEnable>
        <Item>{{DLC_NAME_LOWER}}:/%PLATFORM%/{{MAPPING_BASE_NAME_LOWER}}.{{ARCHIVE_EXT}}</Item>
      </filesToEnable>
      <txdToLoad />
      <txdToUnload />
      <residentResources />
      <unregisterResources />
    </Item>
    <Item>
      <changeSetName>{{MAPPING_BASE_NAME_UPPER}}_MAP</changeSetName>
      <mapChangeSetData>
        <Item>
          <associatedMap>{{LEVEL_NAME_HASH}}</associatedMap>
          <filesToInvalidate />
          <filesToDisable />
          <filesToEnable>
            <Item>{{DLC_NAME_LOWER}}:/%PLATFORM%/{{MAPPING_BASE_NAME_LOWER}}.{{ARCHIVE_EXT}}</Item>
          </filesToEnable>
        </Item>
      </mapChangeSetData>
      <filesToInvalidate />
      <filesToDisable />
      <filesToEnable />
      <txdToLoad />
      <txdToUnload />
      <residentResources />
      <unregisterResources />
      <requiresLoadingScreen value="false" />
      <loadingScreenContext />
      <useCacheLoader value="true" />
    </Item>
  </contentChangeSets>
  <patchFiles />
</CDataFileMgr__ContentsOfDataFileXml>
"#;

pub const BUILTIN_SETUP_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SSetupData>
  <deviceName>dlc_{{MAPPING_BASE_NAME_LOWER}}</deviceName>
  <datFile>content.xml</datFile>
  <timeStamp>{{TIMESTAMP_PLACEHOLDER}}</timeStamp>
  <nameHash>{{MAPPING_BASE_NAME_LOWER}}</nameHash>
  <contentChangeSets />
  <contentChangeSetGroups>
    <Item>
      <NameHash>GROUP_STARTUP</NameHash>
      <ContentChangeSets>
        <Item>{{DLC_NAME_UPPER}}_AUTOGEN</Item>
      </ContentChangeSets>
    </Item>
    <Item>
      <NameHash>GROUP_MAP</NameHash>
      <ContentChangeSets>
        <Item>{{MAPPING_BASE_NAME_UPPER}}_MAP</Item>
      </ContentChangeSets>
    </Item>
  </contentChangeSetGroups>
  <startupScript />
  <scriptCallstackSize value="0" />
  <type>EXTRACONTENT_COMPAT_PACK</type>
  <order value="30" />
  <minorOrder value="0" />
  <isLevelPack value="false" />
  <dependencyPackHash />
  <requiredVersion />
  <subPackCount value="0" />
</SSetupData>
"#;

/// Renders content and setup manifests from compiled templates
#[derive(Debug, Clone)]
pub struct ManifestTemplateEngine {
    content: Template,
    setup: Template,
    archive_extension: String,
}

impl ManifestTemplateEngine {
    /// Engine with the built-in templates
    pub fn builtin(archive_extension: &str) -> MapDlcResult<Self> {
        Self::from_sources(
            BUILTIN_CONTENT_TEMPLATE,
            BUILTIN_SETUP_TEMPLATE,
            archive_extension,
        )
    }

    /// Compile both templates, rejecting undeclared placeholders
    pub fn from_sources(
        content_source: &str,
        setup_source: &str,
        archive_extension: &str,
    ) -> MapDlcResult<Self> {
        let content = Template::compile(content_source, CONTENT_PLACEHOLDERS).map_err(|source| {
            MapDlcError::InvalidTemplate {
                kind: "content",
                source,
            }
        })?;
        let setup = Template::compile(setup_source, SETUP_PLACEHOLDERS).map_err(|source| {
            MapDlcError::InvalidTemplate {
                kind: "setup",
                source,
            }
        })?;

        Ok(Self {
            content,
            setup,
            archive_extension: archive_extension.to_string(),
        })
    }

    pub fn render_content_manifest(&self, names: &NameSet, level_hash: &str) -> String {
        let values = TemplateValues::new()
            .with(DLC_NAME_LOWER, names.package_name_lower())
            .with(DLC_NAME_UPPER, names.package_name_upper())
            .with(MAPPING_BASE_NAME_LOWER, names.slug_lower())
            .with(MAPPING_BASE_NAME_UPPER, names.slug_upper())
            .with(LEVEL_NAME_HASH, level_hash)
            .with(ARCHIVE_EXT, self.archive_extension.as_str());
        self.content.render(&values)
    }

    pub fn render_setup_manifest(&self, names: &NameSet, timestamp: NaiveDateTime) -> String {
        let values = TemplateValues::new()
            .with(DLC_NAME_UPPER, names.package_name_upper())
            .with(MAPPING_BASE_NAME_LOWER, names.slug_lower())
            .with(MAPPING_BASE_NAME_UPPER, names.slug_upper())
            .with(TIMESTAMP_PLACEHOLDER, format_timestamp(timestamp));
        self.setup.render(&values)
    }
}

/// Format a render instant as `MM/DD/YYYY hh:mm:ss AM|PM`
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
