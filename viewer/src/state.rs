//! Handles the state for the viewer.

use loader::{System, View};
use simulator::canvas::DrawList;
use simulator::geometry::Color as SimColor;
use simulator::interaction::PointerInput;
use simulator::{Simulation, TICK};

use euclid::default::{Box2D, Point2D};
use ggez::event::{EventHandler, MouseButton};
use ggez::nalgebra::Point2;
use ggez::{
    graphics::{self, DrawParam, MeshBuilder, Rect},
    timer, Context, GameResult,
};
use log::{debug, error};

use graphics::Color;

/// The state of the solar system.
pub struct State {
    simulation: Simulation,
    view: View,
    /// The part of the simulation the window is showing
    screen: Rect,
    /// Where the pointer is, in simulation coordinates
    pointer: Point2D<f64>,
    /// The button went down since the last tick
    pressed: bool,
    /// The button came up since the last tick
    released: bool,
    /// Reused every frame
    draw_list: DrawList,
}

impl State {
    pub fn new(ctx: &mut Context, system: System) -> GameResult<Self> {
        let System {
            simulation, view, ..
        } = system;
        let (width, height) = graphics::drawable_size(ctx);
        let mut s = State {
            simulation,
            view,
            screen: Rect::new(0.0, 0.0, width, height),
            pointer: Point2D::new(-1.0, -1.0),
            pressed: false,
            released: false,
            draw_list: DrawList::new(),
        };
        s.fix_coordinates(ctx, width, height)?;
        Ok(s)
    }

    /// Fix the screen space to the window size, or to the system's own field if it has one.
    /// A window with no area (minimized, say) keeps the last good screen.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        if !has_area(width, height) {
            debug!("Ignoring a {}x{} window", width, height);
            return Ok(());
        }
        self.screen = match self.view {
            View::Window => {
                self.simulation.resize(width as f64, height as f64);
                Rect::new(0.0, 0.0, width, height)
            }
            View::Fixed(field) => fit(field, width, height),
        };
        debug!("Window is {}x{}, showing {:?}", width, height, self.screen);
        graphics::set_screen_coordinates(ctx, self.screen)
    }

    /// Window pixels to simulation coordinates.
    fn to_world(&self, ctx: &Context, x: f32, y: f32) -> Point2D<f64> {
        let (width, height) = graphics::drawable_size(ctx);
        if !has_area(width, height) {
            return self.pointer;
        }
        window_to_world(self.screen, width, height, x, y)
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        const DESIRED_FPS: u32 = 60;
        while timer::check_update_time(ctx, DESIRED_FPS) {
            let input = PointerInput {
                position: self.pointer,
                pressed: self.pressed,
                released: self.released,
            };
            self.pressed = false;
            self.released = false;
            self.simulation.update(TICK, &input);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, graphics::BLACK);

        self.draw_list.clear();
        self.simulation.paint(&mut self.draw_list);

        let mut mesh = MeshBuilder::new();
        let mut empty = true;
        for call in self.draw_list.calls.iter() {
            let points: Vec<Point2<f32>> = call
                .triangles()
                .iter()
                .flat_map(|tri| tri.iter())
                .map(|p| Point2::new(p.x as f32, p.y as f32))
                .collect();
            if points.is_empty() {
                continue;
            }
            mesh.triangles(&points, to_ggez(call.color()))?;
            empty = false;
        }
        // ggez refuses to build a mesh with no vertices
        if !empty {
            let mesh = mesh.build(ctx)?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }

        graphics::present(ctx)
    }

    fn mouse_button_down_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.pointer = self.to_world(ctx, x, y);
            self.pressed = true;
        }
    }

    fn mouse_button_up_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.pointer = self.to_world(ctx, x, y);
            self.released = true;
        }
    }

    fn mouse_motion_event(&mut self, ctx: &mut Context, x: f32, y: f32, _dx: f32, _dy: f32) {
        self.pointer = self.to_world(ctx, x, y);
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(e) = self.fix_coordinates(ctx, width, height) {
            error!("Could not fit the screen to {}x{}: {}", width, height, e);
        }
    }
}

fn to_ggez(c: SimColor) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

fn has_area(width: f32, height: f32) -> bool {
    width > 0.0 && height > 0.0
}

/// The smallest rect with the window's aspect ratio that covers `field`, centered on it.
fn fit(field: Box2D<f64>, width: f32, height: f32) -> Rect {
    let size = field.size();
    let scale = (size.width / width as f64).max(size.height / height as f64);
    let (w, h) = (width as f64 * scale, height as f64 * scale);
    let center = field.min.lerp(field.max, 0.5);
    Rect::new(
        (center.x - w / 2.0) as f32,
        (center.y - h / 2.0) as f32,
        w as f32,
        h as f32,
    )
}

fn window_to_world(screen: Rect, width: f32, height: f32, x: f32, y: f32) -> Point2D<f64> {
    Point2D::new(
        (screen.x + x * screen.w / width) as f64,
        (screen.y + y * screen.h / height) as f64,
    )
}
