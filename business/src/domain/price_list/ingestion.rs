use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ValidityWindow;

use super::model::NewPriceEntry;
use super::repository::PriceListRepository;

/// SupplierId, Sku, ValidFrom, ValidTo, Currency, PricePerUom, MinQty.
pub const EXPECTED_COLUMNS: usize = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Limits of an unconstrained Postgres NUMERIC, so a parsed price is stored without loss.
const MAX_PRICE_SCALE: i64 = 16_383;
const MAX_PRICE_INTEGER_DIGITS: i64 = 131_072;

/// Why a single row was refused. The display text is the short cause shown to the uploader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("missing header row")]
    MissingHeader,
    #[error("expected 7 columns")]
    ColumnCount,
    #[error("SupplierId is not an integer")]
    InvalidSupplierId,
    #[error("ValidFrom is not a YYYY-MM-DD date")]
    InvalidValidFrom,
    #[error("ValidTo is not a YYYY-MM-DD date")]
    InvalidValidTo,
    #[error("PricePerUom is not a decimal number")]
    InvalidPricePerUom,
    #[error("MinQty is not an integer")]
    InvalidMinQty,
    #[error("ValidTo < ValidFrom")]
    InvalidRange,
    #[error("overlaps upload for same SupplierId+Sku")]
    OverlapsBatch,
    #[error("overlaps existing entries for same SupplierId+Sku")]
    OverlapsExisting,
}

impl RowError {
    /// Machine-stable category reported to callers.
    pub fn title(&self) -> &'static str {
        match self {
            RowError::MissingHeader | RowError::ColumnCount => "Invalid CSV",
            RowError::InvalidSupplierId => "Invalid SupplierId",
            RowError::InvalidValidFrom => "Invalid ValidFrom",
            RowError::InvalidValidTo => "Invalid ValidTo",
            RowError::InvalidPricePerUom => "Invalid PricePerUom",
            RowError::InvalidMinQty => "Invalid MinQty",
            RowError::InvalidRange => "Invalid range",
            RowError::OverlapsBatch | RowError::OverlapsExisting => "Overlapping range",
        }
    }
}

/// A row error tied to its 1-based line number in the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    pub row: usize,
    pub error: RowError,
}

impl RowRejection {
    pub fn title(&self) -> &'static str {
        self.error.title()
    }

    pub fn detail(&self) -> String {
        format!("Row {}: {}", self.row, self.error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngestionOutcome {
    Accepted(Vec<NewPriceEntry>),
    Rejected(RowRejection),
}

/// A whitespace-only line trims down to a single empty field. Rows of empty fields are not blank.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

fn parse_price(field: &str) -> Result<BigDecimal, RowError> {
    let price = BigDecimal::from_str(field).map_err(|_| RowError::InvalidPricePerUom)?;
    let (_, scale) = price.as_bigint_and_exponent();
    let integer_digits = price.digits() as i64 - scale;
    if scale > MAX_PRICE_SCALE || integer_digits > MAX_PRICE_INTEGER_DIGITS {
        return Err(RowError::InvalidPricePerUom);
    }
    Ok(price)
}

/// The header only has to be there with the right number of columns; its names are not checked.
pub fn check_header(record: &StringRecord) -> Result<(), RowError> {
    if record.len() != EXPECTED_COLUMNS {
        return Err(RowError::ColumnCount);
    }
    Ok(())
}

/// Parses one data row, checking fields in column order and stopping at the first bad one.
pub fn parse_record(record: &StringRecord) -> Result<NewPriceEntry, RowError> {
    if record.len() != EXPECTED_COLUMNS {
        return Err(RowError::ColumnCount);
    }

    let supplier_id = record[0]
        .parse::<i32>()
        .map_err(|_| RowError::InvalidSupplierId)?;
    let sku = record[1].to_string();
    let valid_from = NaiveDate::parse_from_str(&record[2], DATE_FORMAT)
        .map_err(|_| RowError::InvalidValidFrom)?;
    let valid_to = NaiveDate::parse_from_str(&record[3], DATE_FORMAT)
        .map_err(|_| RowError::InvalidValidTo)?;
    let currency = record[4].to_string();
    let price_per_unit = parse_price(&record[5])?;
    let min_qty = record[6].parse::<i32>().map_err(|_| RowError::InvalidMinQty)?;
    let window = ValidityWindow::new(valid_from, valid_to).ok_or(RowError::InvalidRange)?;

    Ok(NewPriceEntry {
        supplier_id,
        sku,
        window,
        currency,
        price_per_unit,
        min_qty,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ParsingHeader,
    ParsingRows,
}

/// Validates an uploaded price list, row by row, against itself and the stored entries.
///
/// Rows are checked strictly in order because each one is compared with every row accepted
/// before it. Nothing is written: an accepted batch is handed back for the caller to persist.
pub struct IngestionValidator<'a> {
    repository: &'a dyn PriceListRepository,
}

impl<'a> IngestionValidator<'a> {
    pub fn new(repository: &'a dyn PriceListRepository) -> Self {
        Self { repository }
    }

    /// Store failures are returned as errors; bad data is returned as a rejected outcome.
    pub async fn validate(&self, body: &str) -> Result<IngestionOutcome, RepositoryError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(body.trim_start_matches('\u{feff}').as_bytes());

        let mut state = State::ParsingHeader;
        let mut accepted: Vec<NewPriceEntry> = Vec::new();
        let mut record = StringRecord::new();
        let mut last_row = 0;

        loop {
            let more = match reader.read_record(&mut record) {
                Ok(more) => more,
                // A flexible reader over UTF-8 text only fails when it cannot split a row.
                Err(e) => {
                    let row = e
                        .position()
                        .map_or(last_row + 1, |p| p.line() as usize);
                    return Ok(IngestionOutcome::Rejected(RowRejection {
                        row,
                        error: RowError::ColumnCount,
                    }));
                }
            };
            if !more {
                break;
            }

            let row = record
                .position()
                .map_or(last_row + 1, |p| p.line() as usize);
            last_row = row;

            let checked = match state {
                State::ParsingHeader => {
                    state = State::ParsingRows;
                    check_header(&record)
                }
                State::ParsingRows if is_blank(&record) => continue,
                State::ParsingRows => match self.validate_row(&record, &accepted).await? {
                    Ok(entry) => {
                        accepted.push(entry);
                        Ok(())
                    }
                    Err(error) => Err(error),
                },
            };

            if let Err(error) = checked {
                return Ok(IngestionOutcome::Rejected(RowRejection { row, error }));
            }
        }

        if state == State::ParsingHeader {
            return Ok(IngestionOutcome::Rejected(RowRejection {
                row: 1,
                error: RowError::MissingHeader,
            }));
        }

        Ok(IngestionOutcome::Accepted(accepted))
    }

    async fn validate_row(
        &self,
        record: &StringRecord,
        accepted: &[NewPriceEntry],
    ) -> Result<Result<NewPriceEntry, RowError>, RepositoryError> {
        let entry = match parse_record(record) {
            Ok(entry) => entry,
            Err(error) => return Ok(Err(error)),
        };

        if accepted.iter().any(|earlier| earlier.conflicts_with(&entry)) {
            return Ok(Err(RowError::OverlapsBatch));
        }

        if self
            .repository
            .has_overlap(entry.supplier_id, &entry.sku, entry.window)
            .await?
        {
            return Ok(Err(RowError::OverlapsExisting));
        }

        Ok(Ok(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_list::model::{Page, PriceEntry, PriceFilter};
    use crate::domain::pricing::model::Candidate;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub PriceListRepo {}

        #[async_trait]
        impl PriceListRepository for PriceListRepo {
            async fn get_candidates(&self, sku: &str, quantity: i32, date: NaiveDate) -> Result<Vec<Candidate>, RepositoryError>;
            async fn has_overlap(&self, supplier_id: i32, sku: &str, window: ValidityWindow) -> Result<bool, RepositoryError>;
            async fn add_batch(&self, entries: &[NewPriceEntry]) -> Result<(), RepositoryError>;
            async fn list(&self, filter: &PriceFilter) -> Result<Page<PriceEntry>, RepositoryError>;
        }
    }

    const HEADER: &str = "SupplierId,Sku,ValidFrom,ValidTo,Currency,PricePerUom,MinQty";

    fn csv(rows: &[&str]) -> String {
        std::iter::once(HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn parse_row(line: &str) -> Result<NewPriceEntry, RowError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        parse_record(&StringRecord::from(fields))
    }

    fn repo_without_overlaps() -> MockPriceListRepo {
        let mut repo = MockPriceListRepo::new();
        repo.expect_has_overlap().returning(|_, _, _| Ok(false));
        repo
    }

    fn rejection(outcome: IngestionOutcome) -> RowRejection {
        match outcome {
            IngestionOutcome::Rejected(rejection) => rejection,
            IngestionOutcome::Accepted(entries) => {
                panic!("expected rejection, accepted {} entries", entries.len())
            }
        }
    }

    #[test]
    fn should_parse_valid_row() {
        let entry = parse_row("1, ABC123 ,2025-08-01,2025-12-31,EUR,9.50,100").unwrap();

        assert_eq!(entry.supplier_id, 1);
        assert_eq!(entry.sku, "ABC123");
        assert_eq!(
            entry.window.from(),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
        assert_eq!(
            entry.window.to(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert_eq!(entry.currency, "EUR");
        assert_eq!(entry.price_per_unit, BigDecimal::from_str("9.5").unwrap());
        assert_eq!(entry.min_qty, 100);
    }

    #[test]
    fn should_report_first_bad_field_in_column_order() {
        let cases = [
            ("1,ABC,2025-08-01,2025-12-31,EUR,9.50", RowError::ColumnCount),
            ("1,ABC,2025-08-01,2025-12-31,EUR,9.50,100,x", RowError::ColumnCount),
            ("x,ABC,bad,bad,EUR,bad,bad", RowError::InvalidSupplierId),
            ("1,ABC,01/08/2025,bad,EUR,bad,bad", RowError::InvalidValidFrom),
            ("1,ABC,2025-08-01,2025-13-01,EUR,bad,bad", RowError::InvalidValidTo),
            ("1,ABC,2025-08-01,2025-12-31,EUR,9;50,bad", RowError::InvalidPricePerUom),
            ("1,ABC,2025-08-01,2025-12-31,EUR,9.50,1.5", RowError::InvalidMinQty),
            ("1,ABC,2025-12-31,2025-08-01,EUR,9.50,100", RowError::InvalidRange),
        ];

        for (line, expected) in cases {
            assert_eq!(parse_row(line).unwrap_err(), expected, "line: {line}");
        }
    }

    #[test]
    fn should_map_errors_to_stable_titles() {
        assert_eq!(RowError::ColumnCount.title(), "Invalid CSV");
        assert_eq!(RowError::InvalidPricePerUom.title(), "Invalid PricePerUom");
        assert_eq!(RowError::InvalidRange.title(), "Invalid range");
        assert_eq!(RowError::OverlapsExisting.title(), "Overlapping range");
        assert_eq!(RowError::OverlapsBatch.title(), "Overlapping range");
    }

    #[test]
    fn should_keep_price_precision_exactly() {
        let entry = parse_row("1,ABC123,2025-08-01,2025-12-31,EUR,9.1234567,100").unwrap();

        assert_eq!(entry.price_per_unit.to_string(), "9.1234567");
    }

    #[test]
    fn should_reject_price_beyond_storable_numeric() {
        let cases = ["1e200000", "1e-20000"];

        for price in cases {
            let line = format!("1,ABC123,2025-08-01,2025-12-31,EUR,{price},100");
            assert_eq!(
                parse_row(&line).unwrap_err(),
                RowError::InvalidPricePerUom,
                "price: {price}"
            );
        }
    }

    #[tokio::test]
    async fn should_accept_upload_starting_with_byte_order_mark() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let body = format!("\u{feff}{}", csv(&["1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100"]));
        let outcome = validator.validate(&body).await.unwrap();

        assert!(matches!(outcome, IngestionOutcome::Accepted(entries) if entries.len() == 1));
    }

    #[tokio::test]
    async fn should_read_quoted_fields() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&["1,\"ABC 123\",2025-08-01,2025-12-31,EUR,\"9.50\",100"]))
            .await
            .unwrap();

        match outcome {
            IngestionOutcome::Accepted(entries) => assert_eq!(entries[0].sku, "ABC 123"),
            IngestionOutcome::Rejected(r) => panic!("unexpected rejection: {}", r.detail()),
        }
    }

    #[tokio::test]
    async fn should_accept_rows_with_adjacent_windows() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&[
                "1,ABC123,2025-08-01,2025-08-31,EUR,9.50,100",
                "1,ABC123,2025-09-01,2025-12-31,EUR,9.40,100",
            ]))
            .await
            .unwrap();

        match outcome {
            IngestionOutcome::Accepted(entries) => assert_eq!(entries.len(), 2),
            IngestionOutcome::Rejected(r) => panic!("unexpected rejection: {}", r.detail()),
        }
    }

    #[tokio::test]
    async fn should_reject_nested_window_within_batch() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&[
                "1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100",
                "1,ABC123,2025-09-01,2025-10-31,EUR,9.40,50",
            ]))
            .await
            .unwrap();

        let rejection = rejection(outcome);
        assert_eq!(rejection.title(), "Overlapping range");
        assert_eq!(
            rejection.detail(),
            "Row 3: overlaps upload for same SupplierId+Sku"
        );
    }

    #[tokio::test]
    async fn should_reject_overlap_with_stored_entries() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_has_overlap()
            .withf(|supplier_id, sku, _| *supplier_id == 2 && sku == "ABC123")
            .returning(|_, _, _| Ok(true));
        repo.expect_has_overlap()
            .withf(|supplier_id, _, _| *supplier_id != 2)
            .returning(|_, _, _| Ok(false));
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&[
                "1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100",
                "2,ABC123,2025-07-01,2025-10-31,USD,10.00,50",
            ]))
            .await
            .unwrap();

        let rejection = rejection(outcome);
        assert_eq!(rejection.error, RowError::OverlapsExisting);
        assert_eq!(
            rejection.detail(),
            "Row 3: overlaps existing entries for same SupplierId+Sku"
        );
    }

    #[tokio::test]
    async fn should_stop_at_short_row_without_evaluating_later_rows() {
        let mut repo = MockPriceListRepo::new();
        // Only the first data row reaches the store check.
        repo.expect_has_overlap()
            .times(1)
            .returning(|_, _, _| Ok(false));
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&[
                "1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100",
                "2,ABC123,2025-07-01,2025-10-31,USD,10.00",
                "3,ABC123,2025-07-01,2025-10-31,USD,10.00,50",
            ]))
            .await
            .unwrap();

        let rejection = rejection(outcome);
        assert_eq!(rejection.title(), "Invalid CSV");
        assert_eq!(rejection.detail(), "Row 3: expected 7 columns");
    }

    #[tokio::test]
    async fn should_skip_blank_lines_but_keep_physical_row_numbers() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&[
                "",
                "1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100",
                "   ",
                "x,ABC123,2025-08-01,2025-12-31,EUR,9.50,100",
            ]))
            .await
            .unwrap();

        let rejection = rejection(outcome);
        assert_eq!(rejection.title(), "Invalid SupplierId");
        assert_eq!(rejection.row, 5);
    }

    #[tokio::test]
    async fn should_reject_row_of_empty_fields_as_bad_supplier_id() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator.validate(&csv(&[",,,,,,"])).await.unwrap();

        let rejection = rejection(outcome);
        assert_eq!(rejection.title(), "Invalid SupplierId");
        assert_eq!(rejection.row, 2);
    }

    #[tokio::test]
    async fn should_reject_short_row_of_empty_fields_as_invalid_csv() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate(&csv(&[",,,", "1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100"]))
            .await
            .unwrap();

        let rejection = rejection(outcome);
        assert_eq!(rejection.title(), "Invalid CSV");
        assert_eq!(rejection.detail(), "Row 2: expected 7 columns");
    }

    #[tokio::test]
    async fn should_handle_crlf_line_endings() {
        let repo = repo_without_overlaps();
        let validator = IngestionValidator::new(&repo);

        let body = format!("{HEADER}\r\n1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100\r\n");
        let outcome = validator.validate(&body).await.unwrap();

        assert!(matches!(outcome, IngestionOutcome::Accepted(entries) if entries.len() == 1));
    }

    #[tokio::test]
    async fn should_reject_empty_upload_as_missing_header() {
        let repo = MockPriceListRepo::new();
        let validator = IngestionValidator::new(&repo);

        let rejection = rejection(validator.validate("").await.unwrap());

        assert_eq!(rejection.title(), "Invalid CSV");
        assert_eq!(rejection.detail(), "Row 1: missing header row");
    }

    #[tokio::test]
    async fn should_reject_header_with_wrong_column_count() {
        let repo = MockPriceListRepo::new();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator
            .validate("SupplierId,Sku\n1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100")
            .await
            .unwrap();

        assert_eq!(rejection(outcome).detail(), "Row 1: expected 7 columns");
    }

    #[tokio::test]
    async fn should_accept_header_only_upload_with_no_entries() {
        let repo = MockPriceListRepo::new();
        let validator = IngestionValidator::new(&repo);

        let outcome = validator.validate(HEADER).await.unwrap();

        assert_eq!(outcome, IngestionOutcome::Accepted(vec![]));
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_has_overlap()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError));
        let validator = IngestionValidator::new(&repo);

        let result = validator
            .validate(&csv(&["1,ABC123,2025-08-01,2025-12-31,EUR,9.50,100"]))
            .await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }
}
