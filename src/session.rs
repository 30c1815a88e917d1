//! Headless model of the viewer's render loop.

use crate::controls::{Command, ParameterController};
use crate::heightfield::{HeightField, HeightFieldGenerator, Layer};
use crate::noise::NoiseError;
use crate::params::{GridSize, NoiseParameters, WATERFALL_LAST_LEVEL};

/// Rolling z-level shown by the waterfall animation
#[derive(Debug, Clone)]
pub struct WaterfallCursor {
    level: usize,
    last_level: usize,
}

impl Default for WaterfallCursor {
    fn default() -> Self {
        Self::new(WATERFALL_LAST_LEVEL)
    }
}

impl WaterfallCursor {
    pub fn new(last_level: usize) -> Self {
        Self {
            level: 0,
            last_level,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Advance one frame.
    ///
    /// Returns the level to display when `advancing`. The level counts up
    /// every frame either way and wraps to 0 once it passes `last_level`.
    pub fn tick(&mut self, advancing: bool) -> Option<usize> {
        let shown = if advancing {
            if self.level > self.last_level {
                self.level = 0;
            }
            Some(self.level)
        } else {
            None
        };
        self.level += 1;
        shown
    }
}

/// What changed during one [`ViewerSession::frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUpdate {
    /// The height field was regenerated this frame
    pub regenerated: bool,
    /// Layer to display, if the displayed surface changed
    pub layer: Option<usize>,
}

/// Owns the tuning state, generator and current height field
#[derive(Debug)]
pub struct ViewerSession {
    controller: ParameterController,
    generator: HeightFieldGenerator,
    field: HeightField,
    cursor: WaterfallCursor,
}

impl ViewerSession {
    /// The waterfall wraps at level 63 or the last z layer, whichever is lower.
    pub fn new(size: GridSize, params: NoiseParameters) -> Self {
        let last_level = WATERFALL_LAST_LEVEL.min(size.z.saturating_sub(1) as usize);
        Self {
            controller: ParameterController::new(params),
            generator: HeightFieldGenerator::new(size),
            field: HeightField::new(size),
            cursor: WaterfallCursor::new(last_level),
        }
    }

    pub fn controller(&self) -> &ParameterController {
        &self.controller
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    pub fn apply(&mut self, command: Command) {
        self.controller.apply(command);
    }

    /// Run one loop iteration: regenerate if dirty, then step the waterfall.
    ///
    /// The advance flag is read before regenerating, so a frame that is both
    /// dirty and advancing still steps the waterfall once.
    ///
    /// # Errors
    /// Propagates generation errors; the previous field is kept and the
    /// controller stays dirty.
    pub fn frame(&mut self) -> Result<FrameUpdate, NoiseError> {
        let mut update = FrameUpdate {
            regenerated: false,
            layer: None,
        };

        let advancing = self.controller.is_advancing();

        if self.controller.is_dirty() {
            self.generator
                .generate_into(self.controller.params(), &mut self.field)?;
            self.controller.set_clean();
            self.controller.stop_advance();
            update.regenerated = true;
            update.layer = Some(0);
        }

        if let Some(level) = self.cursor.tick(advancing) {
            update.layer = Some(level);
        }

        Ok(update)
    }

    /// The layer a frame update asked to display
    pub fn layer(&self, level: usize) -> Option<Layer> {
        self.field.layer(u32::try_from(level).ok()?)
    }
}
