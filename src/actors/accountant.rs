use actix::{Actor, Context, Handler, Message};
use tracing::info;
use uuid::Uuid;

/// Writes one `timespent` record per served watch request.
#[derive(Default)]
pub struct Accountant {
    records: u64,
}

impl Accountant {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Actor for Accountant {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!("Starting accountant");
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct LogTimespent {
    pub request_id: Uuid,
    pub widgets: Vec<usize>,
    pub timespent: Vec<f64>,
}

#[derive(Message)]
#[rtype(result = "u64")]
pub struct RecordCount;

impl Handler<LogTimespent> for Accountant {
    type Result = ();

    fn handle(&mut self, msg: LogTimespent, _: &mut Self::Context) -> Self::Result {
        self.records += 1;
        let total: f64 = msg.timespent.iter().sum();
        info!(
            target: "timespent",
            request_id = %msg.request_id,
            widgets = ?msg.widgets,
            total,
            "Watched widgets"
        );
    }
}

impl Handler<RecordCount> for Accountant {
    type Result = u64;

    fn handle(&mut self, _: RecordCount, _: &mut Self::Context) -> Self::Result {
        self.records
    }
}
