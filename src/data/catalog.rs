use std::path::Path;

/// Display name and unit of one plotted quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: String,
    pub unit: String,
}

impl VariableInfo {
    /// `"<name> <unit>"`, or just the name when there is no unit.
    pub fn title(&self) -> String {
        if self.unit.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.unit)
        }
    }
}

/// Axis labels shared by the viewer plot and the rendered frames.
pub const AXIAL_LABEL: &str = "Axial length [m]";
pub const VALUE_LABEL: &str = "Value";

/// Heat-pipe solver outputs, in the order the solver writes them.
pub const CATALOG: [(&str, &str); 15] = [
    ("Vapor velocity", "[m/s]"),
    ("Vapor bulk temperature", "[K]"),
    ("Vapor pressure", "[Pa]"),
    ("Wick velocity", "[m/s]"),
    ("Wick bulk temperature", "[K]"),
    ("Wick pressure", "[Pa]"),
    ("Wall bulk temperature", "[K]"),
    ("Outer wall temperature", "[K]"),
    ("Wall-wick interface temperature", "[K]"),
    ("Wick-vapor interface temperature", "[K]"),
    ("Outer wall heat flux", "[W/m²]"),
    ("Wall-wick heat flux", "[W/m²]"),
    ("Wick-vapor heat flux", "[W/m²]"),
    ("Mass volumetric source", "[kg/s m³]"),
    ("Vapor density", "[kg/m³]"),
];

/// Name for the `index`-th series file.  Past the end of the catalog the
/// file stem is used.
pub fn catalog_entry(index: usize, source: &Path) -> VariableInfo {
    match CATALOG.get(index) {
        Some((name, unit)) => VariableInfo {
            name: name.to_string(),
            unit: unit.to_string(),
        },
        None => VariableInfo {
            name: source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("variable {index}")),
            unit: String::new(),
        },
    }
}
