use crate::config::toml_config::{CompositionConfig, DemoConfig, InheritanceConfig};
use crate::core::composition::ColorDecoration;
use crate::core::decorator::Decorator;
use crate::core::inheritance::ColoredShape;
use crate::core::{Console, Drawable, Result};
use crate::domain::model::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DemoKind {
    Inheritance,
    Composition,
    All,
}

/// 繼承版本：先上色再繪製
pub fn run_inheritance(console: &dyn Console, config: &InheritanceConfig) -> Result<()> {
    tracing::info!("Running inheritance decorator demo");

    let shape = ColoredShape::new(config.name.as_str());
    shape.set_color(console, &config.color)?;
    shape.draw(console)?;

    Ok(())
}

/// 組合版本：先直接繪製，再透過裝飾器繪製同一個形狀
pub fn run_composition(console: &dyn Console, config: &CompositionConfig) -> Result<()> {
    tracing::info!("Running composition decorator demo");

    let shape = Shape::new(config.name.as_str());
    shape.draw(console)?;

    let decorator = ColorDecoration.decorate(&shape);
    decorator.draw(console)?;

    Ok(())
}

pub struct DemoRunner<C: Console> {
    console: C,
    config: DemoConfig,
}

impl<C: Console> DemoRunner<C> {
    pub fn new(console: C) -> Self {
        Self::with_config(console, DemoConfig::default())
    }

    pub fn with_config(console: C, config: DemoConfig) -> Self {
        Self { console, config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn run(&self, kind: DemoKind) -> Result<()> {
        tracing::debug!(?kind, "starting demo");

        match kind {
            DemoKind::Inheritance => run_inheritance(&self.console, &self.config.inheritance)?,
            DemoKind::Composition => run_composition(&self.console, &self.config.composition)?,
            DemoKind::All => {
                run_inheritance(&self.console, &self.config.inheritance)?;
                run_composition(&self.console, &self.config.composition)?;
            }
        }

        tracing::info!(?kind, "demo finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::MemoryConsole;

    #[test]
    fn test_run_all_in_order() {
        let console = MemoryConsole::new();
        let runner = DemoRunner::new(&console);

        runner.run(DemoKind::All).unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "color the triangle blue",
                "draw triangle",
                "draw circle",
                "color the circle",
                "draw circle",
            ]
        );
    }

    #[test]
    fn test_run_with_custom_config() {
        let console = MemoryConsole::new();
        let config = DemoConfig {
            inheritance: InheritanceConfig {
                name: "square".to_string(),
                color: "red".to_string(),
            },
            composition: CompositionConfig::default(),
        };
        let runner = DemoRunner::with_config(&console, config);

        runner.run(DemoKind::Inheritance).unwrap();

        assert_eq!(console.lines(), vec!["color the square red", "draw square"]);
        assert_eq!(runner.config().composition.name, "circle");
    }
}
