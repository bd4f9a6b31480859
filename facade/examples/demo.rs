use std::fs::File;
use std::io::{stdout, Write};
use std::time::Instant;

use crossterm::event::{read, Event as CrosstermEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute};
use simplelog::{Config, LevelFilter, WriteLogger};

use docdom::{render_lines, Document, Event, Key, Modifiers, NodeId};
use facade::select::SELECTED_CLASS;
use facade::Select;

const FRUITS: [(&str, &str); 5] = [
    ("a", "Apple"),
    ("b", "Banana"),
    ("c", "Cherry"),
    ("d", "Date"),
    ("e", "Elderberry"),
];

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let (mut doc, native) = build_page();
    let mut widget = Select::attach(&mut doc, native).expect("native select has options");
    // Keep the dropdown three rows tall so arrow navigation scrolls
    doc.node_mut(widget.list()).viewport_rows = Some(3);

    enable_raw_mode()?;
    let result = run(&mut doc, &mut widget);
    disable_raw_mode()?;
    result
}

fn build_page() -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.set_root(body);

    let select = doc.create_element("select");
    doc.node_mut(select).set_attr(facade::HOST_ATTR, "");
    doc.append_child(body, select);

    for (value, label) in FRUITS {
        let option = doc.create_element("option");
        option_node(&mut doc, option, value, label);
        doc.append_child(select, option);
    }
    (doc, select)
}

fn option_node(doc: &mut Document, id: NodeId, value: &str, label: &str) {
    let node = doc.node_mut(id);
    node.set_attr("value", value);
    node.set_text(label);
}

fn run(doc: &mut Document, widget: &mut Select) -> std::io::Result<()> {
    loop {
        draw(doc, widget)?;

        if let CrosstermEvent::Key(key_event) = read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            let key = Key::from(key_event.code);
            let modifiers = Modifiers::from(key_event.modifiers);
            if modifiers.ctrl && key == Key::Char('c') {
                return Ok(());
            }

            let event = Event::Key {
                target: Some(widget.container()),
                key,
                modifiers,
            };
            widget.handle_event(doc, &event, Instant::now());
        }
    }
}

fn draw(doc: &Document, widget: &Select) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // The demo is the styling layer: the `show` class decides whether
    // the option list is visible at all.
    for line in render_lines(doc, widget.label(), 40) {
        write!(out, "[ {} ]\r\n", line.text)?;
    }
    if widget.is_open(doc) {
        for line in render_lines(doc, widget.list(), 40) {
            let marker = if line.classes.iter().any(|c| c == SELECTED_CLASS) {
                "> "
            } else {
                "  "
            };
            write!(out, "{marker}{}\r\n", line.text)?;
        }
    }

    write!(
        out,
        "\r\nspace: open/close  up/down: move  letters: search  ctrl+c: quit\r\n"
    )?;
    out.flush()
}
