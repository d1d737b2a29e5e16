use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use placemark::config::Config;
use placemark::engine::{Engine, MapState};
use placemark::entities::PlaceFields;
use placemark::external::console::{FixedGeolocation, SharedForm, StderrNotifier, StdoutList, TracingMap};
use placemark::host::{self, Event};

/// A line on stdin either fills in the form or raises an event.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Fill { fill: PlaceFields },
    Event(Event),
}

async fn read_input(sender: async_channel::Sender<Event>, form: SharedForm) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!("failed to read input: {}", err);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Input>(&line) {
            Ok(Input::Fill { fill }) => form.fill(fill),
            Ok(Input::Event(event)) => {
                if sender.send(event).await.is_err() {
                    break;
                }
            }
            Err(err) => tracing::warn!("unreadable input line: {}", err),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let form = SharedForm::default();
    let geolocation = FixedGeolocation::new(config.start_position);
    let list = StdoutList::new(config.list_format);

    let mut engine = Engine::new(
        config,
        Box::new(TracingMap::default()),
        Box::new(list),
        Box::new(form.clone()),
    );

    if engine.start(&geolocation).await == MapState::Unavailable {
        tracing::warn!("set START_POSITION to enable placing markers");
    }

    let (sender, receiver) = async_channel::unbounded();
    tokio::spawn(read_input(sender, form));

    host::serve(&mut engine, receiver, &mut StderrNotifier).await;
}
