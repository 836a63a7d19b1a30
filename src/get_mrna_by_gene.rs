//! Wire contract for the "get mRNA by gene" annotation service call.

use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Wire keys owned by the named fields; never stored in the extension map.
const RESERVED_WIRE_KEYS: [&str; 2] = ["ref", "gene_id_list"];

/// Parameters of one "get mRNA by gene" call.
///
/// `reference` names the annotation object to query and `gene_id_list`
/// restricts the result to the given genes; an absent list means "all
/// genes", an empty list means "explicitly none". Any other key found on
/// the wire is kept verbatim in the extension map, so payloads from newer
/// or older schema revisions survive a round trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMrnaByGeneParams {
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gene_id_list: Option<Vec<String>>,
    #[serde(flatten)]
    extension: Map<String, Value>,
}

impl GetMrnaByGeneParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Stores the object reference, overwriting any prior value. The string
    /// is not validated here; the annotation service interprets it.
    pub fn set_reference<S: Into<String>>(&mut self, reference: S) {
        self.reference = Some(reference.into());
    }

    pub fn with_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.set_reference(reference);
        self
    }

    pub fn gene_id_list(&self) -> Option<&[String]> {
        self.gene_id_list.as_deref()
    }

    pub fn set_gene_id_list(&mut self, gene_ids: Vec<String>) {
        self.gene_id_list = Some(gene_ids);
    }

    pub fn with_gene_id_list(mut self, gene_ids: Vec<String>) -> Self {
        self.set_gene_id_list(gene_ids);
        self
    }

    /// Live view of the extension properties, the wire keys not covered by
    /// the named fields.
    pub fn extension_properties(&self) -> &Map<String, Value> {
        &self.extension
    }

    /// Inserts or overwrites one extension property. The names `ref` and
    /// `gene_id_list` are owned by the named fields and are ignored here,
    /// so the wire form never carries a duplicate key.
    pub fn set_extension_property<S: Into<String>>(&mut self, name: S, value: Value) {
        let name = name.into();
        if RESERVED_WIRE_KEYS.contains(&name.as_str()) {
            return;
        }
        self.extension.insert(name, value);
    }

    pub fn with_extension_property<S: Into<String>>(mut self, name: S, value: Value) -> Self {
        self.set_extension_property(name, value);
        self
    }

    pub fn from_json_str(json_text: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_text)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for GetMrnaByGeneParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GetMrnaByGeneParams [ref=")?;
        match &self.reference {
            Some(reference) => write!(f, "{reference}")?,
            None => write!(f, "unset")?,
        }
        write!(f, ", gene_id_list=")?;
        match &self.gene_id_list {
            Some(gene_ids) => write!(f, "[{}]", gene_ids.iter().join(", "))?,
            None => write!(f, "unset")?,
        }
        let extensions = self
            .extension
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .join(", ");
        write!(f, ", extensions={{{extensions}}}]")
    }
}
