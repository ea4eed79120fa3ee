use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{AccountId, Balance, Command, Error, Operation};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    origin: Option<AccountId>,
    #[serde(default)]
    destination: Option<AccountId>,
    #[serde(default)]
    amount: Option<Balance>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let kind = row.kind.trim().to_ascii_lowercase();
        let op = match (kind.as_str(), row.origin, row.destination, row.amount) {
            ("reset", ..) => return Ok(Command::Reset),
            ("deposit", _, Some(destination), Some(amount)) => Operation::Deposit {
                destination,
                amount,
            },
            ("withdraw", Some(origin), _, Some(amount)) => Operation::Withdraw { origin, amount },
            ("transfer", Some(origin), Some(destination), Some(amount)) => Operation::Transfer {
                origin,
                destination,
                amount,
            },
            ("deposit" | "withdraw" | "transfer", ..) => {
                return Err(Error::Ingestion(format!(
                    "Missing fields for {} operation",
                    kind
                )));
            }
            (other, ..) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(Command::Apply(op))
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type CommandStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::CommandStream {
        // Take ownership of the reader so the iterator we build owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
