use super::definition::Diagram;
use crate::error::DiagramError;

/// A trait for editor or storage formats that can be converted into an archsim `Diagram`.
///
/// This is the seam between whatever an editor persists and the simulation core. By
/// implementing it on your own document type, you provide the translation layer that
/// lets the engine run against your format without the core knowing about it.
///
/// # Example
///
/// ```rust,no_run
/// use archsim::prelude::*;
///
/// // 1. Your own document format.
/// struct CanvasBox { key: String, kind: String }
/// struct CanvasDocument { boxes: Vec<CanvasBox>, arrows: Vec<(String, String)> }
///
/// // 2. Implement `IntoDiagram` for it.
/// impl IntoDiagram for CanvasDocument {
///     fn into_diagram(self) -> std::result::Result<Diagram, DiagramError> {
///         let mut nodes = Vec::new();
///         for canvas_box in self.boxes {
///             let service_type: ServiceType = canvas_box
///                 .kind
///                 .parse()
///                 .map_err(|e: UnknownServiceType| DiagramError::Conversion(e.to_string()))?;
///             nodes.push(ServiceNode::new(canvas_box.key, service_type));
///         }
///         let edges = self
///             .arrows
///             .into_iter()
///             .enumerate()
///             .map(|(i, (from, to))| Edge::new(format!("e{}", i), from, to))
///             .collect();
///
///         Ok(Diagram { nodes, edges, traffic: TrafficProfile::default() })
///     }
/// }
/// ```
pub trait IntoDiagram {
    /// Consumes the object and converts it into a diagram the engine can simulate.
    fn into_diagram(self) -> Result<Diagram, DiagramError>;
}

impl IntoDiagram for Diagram {
    fn into_diagram(self) -> Result<Diagram, DiagramError> {
        Ok(self)
    }
}

impl Diagram {
    /// Parses a diagram document (`{ "nodes": [...], "edges": [...], "traffic": {...} }`).
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(json).map_err(DiagramError::from)
    }

    /// Loads a diagram document from disk and range-checks it.
    pub fn from_file(path: &str) -> Result<Self, DiagramError> {
        let content = std::fs::read_to_string(path).map_err(|e| DiagramError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let diagram = Self::from_json(&content)?;
        diagram.check()?;
        Ok(diagram)
    }
}
