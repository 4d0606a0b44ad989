//! Runnable demonstrations, one per catalogue entry.
//!
//! Each demo drives its pattern's example the same way the tests do and
//! returns what it observed as plain lines, so a front-end can print them.

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::abstract_factory::{App, MobileWidgetFactory, WebWidgetFactory};
use crate::adapter::{Adaptee, Adapter, Data, Target, TargetClass};
use crate::bridge::{Album, AlbumResource, Artist, ArtistResource, LongFormView, ShortFormView, View};
use crate::catalog::Pattern;
use crate::composite::{Component, Product, ShippingBox, count_leaves};
use crate::error::{PatternError, PatternResult};
use crate::factory_method::{
    BombedMazeGame, EnchantedMazeGame, Logistics, MazeGame, MazeGameExt, RoadLogistics,
    SeaLogistics, StandardMazeGame,
};
use crate::memento::{Caretaker, Originator};
use crate::observer::{MirrorObserver, NotifyMode, Subject};
use crate::prototype::{Circle, Shape, ShapeRegistry, Square};
use crate::singleton::{SimpleSingleton, ThreadSafeSingleton};
use crate::visitor::{City, ExportXmlVisitor, Industry, Node, visit_all};

/// Knobs for the demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoOptions {
    /// Threads racing for the thread-safe singleton.
    pub singleton_racers: usize,
}

impl DemoOptions {
    /// Upper bound on `singleton_racers`; each racer is an OS thread.
    pub const MAX_SINGLETON_RACERS: usize = 256;

    pub fn validate(&self) -> PatternResult<()> {
        if (1..=Self::MAX_SINGLETON_RACERS).contains(&self.singleton_racers) {
            Ok(())
        } else {
            Err(PatternError::InvalidRacers {
                requested: self.singleton_racers,
                max: Self::MAX_SINGLETON_RACERS,
            })
        }
    }
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            singleton_racers: 8,
        }
    }
}

/// What a demonstration printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    pub pattern: Pattern,
    pub lines: Vec<String>,
}

/// Run one demonstration with default options.
pub fn run(pattern: Pattern) -> PatternResult<DemoReport> {
    run_with(pattern, &DemoOptions::default())
}

/// Run every demonstration, in catalogue order.
pub fn run_all(options: &DemoOptions) -> PatternResult<Vec<DemoReport>> {
    Pattern::ALL.iter().map(|p| run_with(*p, options)).collect()
}

#[instrument(skip(options), fields(pattern = %pattern))]
pub fn run_with(pattern: Pattern, options: &DemoOptions) -> PatternResult<DemoReport> {
    options.validate()?;

    let lines = match pattern {
        Pattern::AbstractFactory => abstract_factory(),
        Pattern::Adapter => adapter(),
        Pattern::Bridge => bridge(),
        Pattern::Composite => composite(),
        Pattern::FactoryMethod => factory_method(),
        Pattern::Memento => memento()?,
        Pattern::Observer => observer(),
        Pattern::Prototype => prototype()?,
        Pattern::Singleton => singleton(options.singleton_racers)?,
        Pattern::Visitor => visitor(),
    };

    info!(lines = lines.len(), "Demo finished");
    Ok(DemoReport { pattern, lines })
}

fn abstract_factory() -> Vec<String> {
    let mut app = App::new(Box::new(MobileWidgetFactory));
    let mut lines = app.render();
    app.change_widget_factory(Box::new(WebWidgetFactory));
    lines.extend(app.render());
    lines
}

fn adapter() -> Vec<String> {
    let data = Data::new(42);
    let adaptee = Adaptee;
    vec![
        TargetClass.some_method(&data),
        Adapter::new(&adaptee).some_method(&data),
    ]
}

fn bridge() -> Vec<String> {
    let artist = ArtistResource::new(Artist::new("Kurt Kobain", "Lived fast, died young."));
    let album = AlbumResource::new(Album::new(
        "Significant Other",
        "Breaks your face tonight.",
    ));

    vec![
        LongFormView::new(&artist).render(),
        ShortFormView::new(&artist).render(),
        LongFormView::new(&album).render(),
        ShortFormView::new(&album).render(),
    ]
}

fn composite() -> Vec<String> {
    let objects: Vec<Box<dyn Component>> = vec![
        Box::new(Product::new(10.0)),
        Box::new(Product::new(20.0)),
        Box::new(ShippingBox::with_children(vec![
            Box::new(Product::new(30.0)),
            Box::new(Product::new(40.0)),
        ])),
    ];

    let mut lines: Vec<String> = objects
        .iter()
        .map(|o| {
            let kind = if o.as_composite().is_some() { "box" } else { "product" };
            format!("{kind} costs {:.2}", o.price())
        })
        .collect();

    let leaves: usize = objects.iter().map(|o| count_leaves(o.as_ref())).sum();
    lines.push(format!("{leaves} products in total"));
    lines
}

fn factory_method() -> Vec<String> {
    let mut lines = vec![
        RoadLogistics.plan_delivery(42),
        SeaLogistics.plan_delivery(69),
    ];

    let games: [(&str, &dyn MazeGame); 3] = [
        ("standard", &StandardMazeGame),
        ("bombed", &BombedMazeGame),
        ("enchanted", &EnchantedMazeGame),
    ];
    for (name, game) in games {
        let maze = game.create_maze();
        for room in maze.rooms() {
            lines.push(format!(
                "{name} maze, room {}: {:?} room, {:?} walls, {:?} doors",
                room.number(),
                room.kind(),
                room.walls(),
                room.doors()
            ));
        }
    }
    lines
}

fn memento() -> PatternResult<Vec<String>> {
    let mut originator = Originator::new("Foo");
    let mut caretaker = Caretaker::new();
    let mut lines = vec![format!("state: {}", originator.state())];

    let snapshot = originator.create_memento();
    lines.push(format!("captured {}", snapshot.id()));
    caretaker.push(snapshot);

    originator.set_state("Bar");
    lines.push(format!("state: {}", originator.state()));

    let snapshot = caretaker.pop()?;
    originator.apply_memento(&snapshot);
    lines.push(format!("restored {}", snapshot.id()));
    lines.push(format!("state: {}", originator.state()));
    Ok(lines)
}

fn observer() -> Vec<String> {
    let mut lines = Vec::new();

    for mode in [NotifyMode::Pull, NotifyMode::Push] {
        let mut subject = Subject::new(0, mode);
        let observer = MirrorObserver::attach(&mut subject);

        subject.set_state(1);
        lines.push(format!(
            "{}: after set_state subject={} observer={}",
            subject.mode(),
            subject.state(),
            observer.state()
        ));

        if subject.mode() == NotifyMode::Pull {
            subject.notify();
            lines.push(format!(
                "{}: after notify subject={} observer={}",
                subject.mode(),
                subject.state(),
                observer.state()
            ));
        }
    }

    lines
}

fn prototype() -> PatternResult<Vec<String>> {
    let circle = Circle::new(2);
    let square = Square::new(4.0);
    let mut lines = vec![
        format!(
            "circle area {:.4}, clone area {:.4}",
            circle.area(),
            circle.clone().area()
        ),
        format!(
            "square area {:.4}, clone area {:.4}",
            square.area(),
            square.clone().area()
        ),
    ];

    let mut registry = ShapeRegistry::new();
    registry.register("unit-circle", Box::new(Circle::new(1)));
    registry.register("unit-square", Box::new(Square::new(1.0)));
    for name in registry.names() {
        let shape = registry.create(name)?;
        lines.push(format!("{name}: new {} with area {:.4}", shape.name(), shape.area()));
    }
    Ok(lines)
}

fn singleton(racers: usize) -> PatternResult<Vec<String>> {
    let simple_same = std::ptr::eq(SimpleSingleton::instance(), SimpleSingleton::instance());

    let results: Vec<Option<Uuid>> = thread::scope(|s| {
        let handles: Vec<_> = (0..racers)
            .map(|n| {
                thread::Builder::new()
                    .name(format!("racer-{n}"))
                    .spawn_scoped(s, || ThreadSafeSingleton::instance().id())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h {
                Ok(handle) => handle.join().ok(),
                Err(e) => {
                    warn!(error = %e, "Could not start racer");
                    None
                }
            })
            .collect()
    });

    let failed = results.iter().filter(|r| r.is_none()).count();
    if failed > 0 {
        return Err(PatternError::RacersFailed { failed, racers });
    }

    let ids: Vec<Uuid> = results.into_iter().flatten().collect();
    let all_same = ids.windows(2).all(|w| w[0] == w[1]);

    Ok(vec![
        format!("simple: same instance = {simple_same}"),
        format!(
            "thread-safe: {} threads, same instance = {all_same}, constructions = {}",
            ids.len(),
            ThreadSafeSingleton::constructions()
        ),
    ])
}

fn visitor() -> Vec<String> {
    let nodes = [Node::from(City), Node::from(Industry)];
    let mut exporter = ExportXmlVisitor::new();
    visit_all(&nodes, &mut exporter);
    exporter.exports().iter().map(|e| e.to_xml()).collect()
}
