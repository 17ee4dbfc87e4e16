use std::fmt;

/// A shader pipeline stage, identified purely by the file extension of its source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    Compute,
    TessellationControl,
    TessellationEvaluation,
}

impl ShaderStage {
    /// Every recognized stage, in the order the builder visits them.
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Geometry,
        ShaderStage::Compute,
        ShaderStage::TessellationControl,
        ShaderStage::TessellationEvaluation,
    ];

    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
            ShaderStage::Geometry => "geom",
            ShaderStage::Compute => "comp",
            ShaderStage::TessellationControl => "tesc",
            ShaderStage::TessellationEvaluation => "tese",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.extension() == extension)
    }
}

impl fmt::Display for ShaderStage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_order() {
        let extensions: Vec<_> = ShaderStage::ALL
            .iter()
            .map(|stage| stage.extension())
            .collect();

        assert_eq!(extensions, ["vert", "frag", "geom", "comp", "tesc", "tese"]);
    }

    #[test]
    fn from_extension() {
        for stage in ShaderStage::ALL {
            assert_eq!(ShaderStage::from_extension(stage.extension()), Some(stage));
        }

        assert_eq!(ShaderStage::from_extension("glsl"), None);
        assert_eq!(ShaderStage::from_extension("spv"), None);
        assert_eq!(ShaderStage::from_extension("VERT"), None);
        assert_eq!(ShaderStage::from_extension(""), None);
    }
}
