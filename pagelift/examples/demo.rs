use std::time::{Duration, Instant};

use pagedom::{Document, Element, Event, LayoutResult, Rect};
use pagelift::{EnhanceConfig, Enhancer};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let mut doc = Document::new(page()).with_viewport(Rect::from_size(1280, 720));
    let layout = layout();
    let mut enhancer = Enhancer::install(&mut doc, EnhanceConfig::default());

    let t0 = Instant::now();

    // Scroll down: the about section fades in and the counters arm
    enhancer.handle_event(&mut doc, &layout, &Event::Scroll { delta_y: 900 }, t0);
    enhancer.tick(&mut doc, &layout, t0 + Duration::from_millis(2000));
    println!(
        "projects counter reads: {}",
        doc.find("projects-counter").unwrap().text_content()
    );

    // Fill the form and submit it
    for (id, value) in [
        ("name-input", "Ada Lovelace"),
        ("email-input", "ada@example.com"),
        ("message-input", "I would like to know more about your work."),
    ] {
        enhancer.handle_event(
            &mut doc,
            &layout,
            &Event::Input {
                target: id.to_string(),
                value: value.to_string(),
            },
            t0,
        );
    }
    enhancer.handle_event(
        &mut doc,
        &layout,
        &Event::Submit {
            target: "contact-form".to_string(),
        },
        t0 + Duration::from_secs(3),
    );
    println!(
        "banner shown: {}",
        enhancer.validator().current_banner().is_some()
    );

    // Let the success sequence play out
    let after = t0 + Duration::from_secs(3) + Duration::from_millis(2300);
    enhancer.tick(&mut doc, &layout, after);
    println!(
        "banner cleared: {}, name field reset: {:?}",
        enhancer.validator().current_banner().is_none(),
        doc.find("name-input").unwrap().value_text()
    );
}

fn page() -> Element {
    Element::div()
        .id("root")
        .child(
            Element::new("nav").id("nav").child(
                Element::new("a")
                    .id("contact-link")
                    .attr("href", "#contact-section")
                    .text("Contact"),
            ),
        )
        .child(
            Element::div()
                .id("about")
                .attr("data-animate", "")
                .text("We build small, careful software."),
        )
        .child(
            Element::new("section")
                .id("stats")
                .attr("data-stats", "")
                .child(
                    Element::span("")
                        .id("projects-counter")
                        .attr("data-counter", "")
                        .attr("data-target", "128"),
                ),
        )
        .child(
            Element::new("section").id("contact-section").child(
                Element::form()
                    .id("contact-form")
                    .attr("name", "contact")
                    .child(Element::div().child(
                        Element::input("text").id("name-input").attr("name", "name"),
                    ))
                    .child(Element::div().child(Element::input("email").id("email-input")))
                    .child(Element::div().child(Element::input("tel").id("phone-input")))
                    .child(Element::div().child(
                        Element::textarea().id("message-input").attr("name", "message"),
                    ))
                    .child(Element::button("Send").id("send").class("btn")),
            ),
        )
}

fn layout() -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in [
        ("root", Rect::new(0, 0, 1280, 2600)),
        ("nav", Rect::new(0, 0, 1280, 40)),
        ("contact-link", Rect::new(10, 10, 80, 20)),
        ("about", Rect::new(0, 900, 1280, 200)),
        ("stats", Rect::new(0, 1200, 1280, 200)),
        ("projects-counter", Rect::new(100, 1250, 200, 40)),
        ("contact-section", Rect::new(0, 1500, 1280, 900)),
        ("contact-form", Rect::new(100, 1550, 600, 700)),
        ("name-input", Rect::new(120, 1570, 300, 30)),
        ("email-input", Rect::new(120, 1620, 300, 30)),
        ("phone-input", Rect::new(120, 1670, 300, 30)),
        ("message-input", Rect::new(120, 1720, 400, 120)),
        ("send", Rect::new(120, 1860, 120, 40)),
    ] {
        layout.insert(id.to_string(), rect);
    }
    layout
}
