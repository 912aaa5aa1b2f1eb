use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderDescription;

pub const RENDER_DESCRIPTION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescriptionJsonContractV1 {
    pub schema_version: u32,
    pub description: ChartRenderDescription,
}

impl ChartRenderDescription {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render description: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderDescriptionJsonContractV1 {
            schema_version: RENDER_DESCRIPTION_JSON_SCHEMA_V1,
            description: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize render description contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare description or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(description) = serde_json::from_str::<ChartRenderDescription>(input) {
            return Ok(description);
        }
        let payload: RenderDescriptionJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse render description json: {e}"))
            })?;
        if payload.schema_version != RENDER_DESCRIPTION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render description schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.description)
    }
}
