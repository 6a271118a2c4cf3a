use std::path::Path;

use anyhow::Context;
use pattern_scatter::prelude::*;
use serde::{Deserialize, Serialize};

/// A canvas and its layer stack as authored in a RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub layers: Vec<LayerState>,
}

impl Scene {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub fn app_state(&self) -> AppState {
        self.layers
            .iter()
            .cloned()
            .fold(AppState::new(self.canvas()), AppState::with_layer)
    }
}

pub fn parse_scene(text: &str) -> anyhow::Result<Scene> {
    let scene: Scene = ron::from_str(text)?;
    scene.canvas().validate()?;
    for layer in &scene.layers {
        layer
            .config
            .validate()
            .with_context(|| format!("layer '{}'", layer.id))?;
    }
    Ok(scene)
}

pub fn load_scene(path: impl AsRef<Path>) -> anyhow::Result<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_scene(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r##"(
        width: 600.0,
        height: 400.0,
        layers: [
            (
                id: "maze",
                config: (seed: 7, style: truchet, complexity: 40),
                visible: true,
                locked: false,
            ),
            (
                id: "dots",
                config: (
                    seed: 11,
                    style: geometric,
                    structure: Some((distributionMode: spiral, minSpacing: 30.0)),
                    symmetry: pmm,
                ),
                visible: true,
                locked: true,
            ),
        ],
    )"##;

    #[test]
    fn parses_layer_stack() {
        let scene = parse_scene(SCENE).expect("scene");
        assert_eq!(scene.layers.len(), 2);
        assert_eq!(scene.layers[0].config.style, Style::Truchet);
        assert_eq!(scene.layers[0].config.complexity, 40);
        let structure = scene.layers[1].config.structure.as_ref().expect("structure");
        assert_eq!(structure.distribution_mode, DistributionMode::Spiral);
        assert_eq!(scene.layers[1].config.symmetry, SymmetryGroup::Pmm);
        assert_eq!(scene.app_state().layers.len(), 2);
    }

    #[test]
    fn bundled_scene_parses() {
        let scene = parse_scene(include_str!("../configs/scene.ron")).expect("bundled scene");
        assert_eq!(scene.layers.len(), 3);
        assert_eq!(scene.layers[2].config.style, Style::TextFill);
        assert!(scene.layers[1].overrides.get(&0).is_some_and(|o| o.hidden));
    }

    #[test]
    fn rejects_empty_canvas() {
        assert!(parse_scene("(width: 0.0, height: 10.0)").is_err());
    }
}
