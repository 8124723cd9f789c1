use crate::canvas::CanvasPainter;
use crate::frame::AnimationFrame;
use glam::Vec2;
use glint_core::driver::{Driver, Effect, FrameRequest};
use glint_core::render::Painter;
use glint_core::set::Instance;
use std::cell::RefCell;
use std::rc::Rc;

/// Packed per-particle record handed to JS: 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedInstance {
    position: [f32; 2],
    size: f32,
    opacity: f32,
}

impl From<Instance> for PackedInstance {
    fn from(instance: Instance) -> Self {
        Self {
            position: instance.position.to_array(),
            size: instance.size,
            opacity: instance.opacity,
        }
    }
}

struct Shared<E> {
    driver: Driver<E>,
    /// `None` when the environment cannot draw; the host then stays inert.
    painter: Option<CanvasPainter>,
    /// Activation waits for the next frame so every timestamp comes from the
    /// same clock as the frame callbacks.
    start_pending: bool,
}

impl<E: Effect> Shared<E> {
    fn frame(&mut self, now: f64) -> FrameRequest {
        let Some(painter) = self.painter.as_mut() else {
            return FrameRequest::Stop;
        };
        if std::mem::take(&mut self.start_pending) {
            self.driver.start(now);
        }
        self.driver.frame(now, painter)
    }
}

/// Binds one effect to a canvas and an animation-frame loop.
pub struct Host<E: Effect + 'static> {
    shared: Rc<RefCell<Shared<E>>>,
    frame: AnimationFrame,
    scratch: Vec<Instance>,
    snapshot: Vec<PackedInstance>,
}

impl<E: Effect + 'static> Host<E> {
    pub fn new(canvas_id: &str, effect: E) -> Self {
        let painter = match CanvasPainter::from_element_id(canvas_id) {
            Ok(painter) => Some(painter),
            Err(err) => {
                log::warn!("#{canvas_id}: {err}; effect disabled");
                None
            }
        };

        let mut driver = Driver::new(effect);
        if let Some(painter) = &painter {
            let size = painter.client_size();
            painter.set_backing_size(size.x as u32, size.y as u32);
            driver.resize(size);
        }

        let shared = Rc::new(RefCell::new(Shared {
            driver,
            painter,
            start_pending: false,
        }));

        let weak = Rc::downgrade(&shared);
        let frame = AnimationFrame::new(move |now| {
            let Some(shared) = weak.upgrade() else {
                return false;
            };
            let Ok(mut shared) = shared.try_borrow_mut() else {
                return false;
            };
            shared.frame(now) == FrameRequest::Continue
        });

        Self {
            shared,
            frame,
            scratch: Vec::new(),
            snapshot: Vec::new(),
        }
    }

    /// Configure the effect, then start it on the next frame.
    pub fn activate(&mut self, configure: impl FnOnce(&mut E)) {
        {
            let mut shared = self.shared.borrow_mut();
            if shared.painter.is_none() {
                return;
            }
            configure(shared.driver.effect_mut());
            shared.start_pending = true;
        }
        self.frame.request();
    }

    /// Cancel pending spawns and the in-flight frame, and wipe the canvas once.
    pub fn deactivate(&mut self) {
        self.frame.cancel();
        let mut shared = self.shared.borrow_mut();
        let Shared { driver, painter, start_pending } = &mut *shared;
        *start_pending = false;
        driver.stop();
        if let Some(painter) = painter.as_mut() {
            painter.clear(driver.size());
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let mut shared = self.shared.borrow_mut();
        let Shared { driver, painter, .. } = &mut *shared;
        if let Some(painter) = painter.as_ref() {
            painter.set_backing_size(width, height);
        }
        driver.resize(Vec2::new(width as f32, height as f32));
    }

    pub fn is_supported(&self) -> bool {
        self.shared.borrow().painter.is_some()
    }

    pub fn is_running(&self) -> bool {
        let shared = self.shared.borrow();
        shared.start_pending || shared.driver.is_active()
    }

    pub fn live_count(&self) -> usize {
        self.shared.borrow().driver.effect().live_count()
    }

    /// Re-pack the live particles; returns how many there are.
    pub fn refresh_snapshot(&mut self) -> usize {
        self.scratch.clear();
        self.shared.borrow().driver.effect().instances(&mut self.scratch);
        self.snapshot.clear();
        self.snapshot.extend(self.scratch.iter().copied().map(PackedInstance::from));
        self.snapshot.len()
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<PackedInstance, f32>(&self.snapshot).as_ptr()
    }

    pub fn snapshot_byte_length(&self) -> usize {
        bytemuck::cast_slice::<PackedInstance, u8>(&self.snapshot).len()
    }
}

impl<E: Effect + 'static> Drop for Host<E> {
    fn drop(&mut self) {
        self.frame.cancel();
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.start_pending = false;
            shared.driver.stop();
        }
    }
}
