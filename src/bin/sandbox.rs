use std::time::Instant;

use anyhow::{Context, Result};
use voxel_sandbox::{
    config::SandboxConfig,
    event::{Message, SlotChangedMessage, Subscriber},
    input::InputEvent,
    state::{game::GameState, inventory::SLOT_COUNT},
};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Heads-up display state, mirrored from game messages into the window title
#[derive(Debug, Default)]
struct Hud {
    slots: [u32; SLOT_COUNT],
    block_count: usize,
    dirty: bool,
}

impl Hud {
    fn title(&self) -> String {
        let slots = self
            .slots
            .iter()
            .map(|c| format!("[{c}]"))
            .collect::<String>();
        format!("Voxel Sandbox - {slots} - {} blocks", self.block_count)
    }
}

impl Subscriber for Hud {
    fn handle_message(&mut self, message: &Message) {
        match message {
            Message::SlotChanged(SlotChangedMessage { slot, count }) => {
                self.slots[*slot] = *count;
                self.dirty = true;
            }
            Message::BlockBroken(_) | Message::BlockPlaced(_) => self.dirty = true,
            Message::PlayerMoved(_) => {}
        }
    }
}

struct App {
    window: Option<Window>,
    game_state: GameState,
    hud: Hud,
    last_update: Instant,
}

impl App {
    fn new(config: &SandboxConfig) -> Self {
        let game_state = GameState::new(config);
        let hud = Hud {
            slots: *game_state.inventory.slots(),
            block_count: game_state.world.len(),
            dirty: true,
        };

        game_state.registry.iter().for_each(|(block_type, texture)| {
            log::info!(
                "{block_type:?} -> texture {} ({:?})",
                texture.index,
                texture.full_path()
            );
        });

        Self {
            window: None,
            game_state,
            hud,
            last_update: Instant::now(),
        }
    }

    /// Process all the messages in the queue, routing them to their subscribers
    fn process_message_queue(&mut self) {
        while let Some(m) = self.game_state.messages.take() {
            log::debug!("Message: {m:?}");
            self.hud.handle_message(&m);
        }

        self.hud.block_count = self.game_state.world.len();

        if self.hud.dirty
            && let Some(window) = &self.window
        {
            window.set_title(&self.hud.title());
            self.hud.dirty = false;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.hud.title())
                .with_inner_size(PhysicalSize::new(1600, 900)),
        ) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event
            && let Some(window) = &self.window
        {
            let size = window.inner_size();
            if size.width == 0 || size.height == 0 {
                return;
            }
            let normalised_delta = (
                delta.0 as f32 / size.width as f32,
                delta.1 as f32 / size.height as f32,
            );
            self.game_state
                .handle_input(InputEvent::Look(normalised_delta.0, normalised_delta.1));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        log::trace!("Event: {event:?}");

        let input = match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                None
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    logical_key, state, ..
                },
                ..
            } => InputEvent::from_key(logical_key, *state),
            // Right click is consumed here, so no platform context menu is shown
            WindowEvent::MouseInput { state, button, .. } => {
                InputEvent::from_mouse_button(*button, *state)
            }
            _ => None,
        };

        if let Some(input) = input {
            self.game_state.handle_input(input);
            self.process_message_queue();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update);
        self.last_update = now;

        self.game_state.advance(&elapsed);
        self.process_message_queue();

        event_loop.set_control_flow(ControlFlow::WaitUntil(
            now + self.game_state.until_next_tick(),
        ));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let seed = std::env::var("SANDBOX_SEED")
        .ok()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("SANDBOX_SEED must be an unsigned integer")?;
    let config = SandboxConfig::builder().seed(seed).build();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(&config);
    event_loop
        .run_app(&mut app)
        .context("Event loop exited with an error")?;

    Ok(())
}
