//! Error type for the lowering pass.

use wolfsv_ir::IrError;

/// An error aborting a conversion.
///
/// Unsupported-construct failures carry the construct kind and the
/// offending symbol name so callers can distinguish them from structural
/// IR errors without string matching.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElaborateError {
    /// A bundled port group was encountered; groups cannot be lowered
    /// without silently dropping sub-port connectivity, so the whole
    /// conversion is aborted.
    #[error("port group `{port}` of module `{module}` is unsupported")]
    UnsupportedPortGroup {
        /// The module whose port list contained the group.
        module: String,
        /// The name of the offending bundled port.
        port: String,
    },

    /// A structural IR error surfaced while building the netlist.
    #[error(transparent)]
    Ir(#[from] IrError),
}
