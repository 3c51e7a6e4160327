// src/treasury/client.rs
use reqwest::header;

use crate::bonds::{parse_bond_page, BondCollection, BondRecord};
use crate::config::BondRequest;
use crate::treasury::models::RedemptionForm;
use crate::utils::error::{AppError, TreasuryError};

const TREASURY_BASE_URL: &str = "https://treasurydirect.gov";
const SBC_PRICE_PATH: &str = "/BC/SBCPrice";
const TREASURY_USER_AGENT: &str = concat!("bond_tracker/", env!("CARGO_PKG_VERSION"));

/// Source of SBCPrice response bodies.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_page(&self, request: &BondRequest) -> Result<String, TreasuryError>;
}

/// Posts redemption forms to TreasuryDirect.
pub struct TreasuryClient {
    http: reqwest::Client,
    url: String,
}

impl TreasuryClient {
    pub fn new() -> Result<Self, TreasuryError> {
        let http = reqwest::Client::builder()
            .user_agent(TREASURY_USER_AGENT)
            .build()?; // Propagate client build error if any

        Ok(Self {
            http,
            url: format!("{}{}", TREASURY_BASE_URL, SBC_PRICE_PATH),
        })
    }
}

impl PageFetcher for TreasuryClient {
    async fn fetch_page(&self, request: &BondRequest) -> Result<String, TreasuryError> {
        let today = chrono::Local::now().date_naive();
        let form = RedemptionForm::new(request, today);
        tracing::debug!("Posting {:?} to {}", form, self.url);

        // .form() sets the application/x-www-form-urlencoded content type
        let response = self
            .http
            .post(&self.url)
            .header(header::ACCEPT, "text/html,*/*")
            .form(&form)
            .send()
            .await?; // Propagates reqwest::Error as TreasuryError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for bond {}", status, request.serial);
            return Err(TreasuryError::Http(status));
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes for bond {}", body.len(), request.serial);
        Ok(body)
    }
}

/// Fetches and parses one bond.
pub async fn fetch_bond<F: PageFetcher>(
    fetcher: &F,
    request: &BondRequest,
) -> Result<BondRecord, AppError> {
    let page = fetcher.fetch_page(request).await?;
    parse_bond_page(&page).map_err(|source| AppError::Extraction {
        serial: request.serial.clone(),
        source,
    })
}

/// Fetches every requested bond in order. The first failure aborts the batch.
pub async fn load_bonds<F: PageFetcher>(
    fetcher: &F,
    requests: &[BondRequest],
) -> Result<BondCollection, AppError> {
    tracing::info!("Retrieving values for {} bonds", requests.len());

    let mut bonds = BondCollection::new();
    for request in requests {
        let record = fetch_bond(fetcher, request).await.map_err(|e| {
            tracing::error!("Error getting bond data for {}: {}", request.serial, e);
            e
        })?;
        tracing::debug!("Bond {} is worth {}", record.serial, record.value);
        bonds.push(record);
    }

    Ok(bonds)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures;
    use crate::utils::error::ExtractError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned pages keyed by serial and records the call order.
    struct CannedFetcher {
        pages: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        fn new(pages: &[(&str, String)]) -> Self {
            Self {
                pages: pages.iter().map(|(s, p)| (s.to_string(), p.clone())).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageFetcher for CannedFetcher {
        async fn fetch_page(&self, request: &BondRequest) -> Result<String, TreasuryError> {
            self.calls.borrow_mut().push(request.serial.clone());
            self.pages
                .get(&request.serial)
                .cloned()
                .ok_or(TreasuryError::Http(reqwest::StatusCode::NOT_FOUND))
        }
    }

    fn request(serial: &str) -> BondRequest {
        BondRequest {
            denomination: 50,
            serial: serial.into(),
            issue_date: "01/1990".into(),
            series: "EE".into(),
        }
    }

    #[test]
    fn test_matured_and_unmatured_batch() {
        let fetcher = CannedFetcher::new(&[
            ("abcdef", fixtures::bond_page(fixtures::MATURED_ROW)),
            ("ghijk", fixtures::bond_page(fixtures::UNMATURED_ROW)),
        ]);

        let requests = [request("abcdef"), request("ghijk")];
        let bonds = tokio_test::block_on(load_bonds(&fetcher, &requests)).unwrap();

        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds.records()[0].serial, "abcdef");
        assert_eq!(bonds.records()[0].note, "MA");

        let unmatured = bonds.unmatured();
        assert_eq!(unmatured.len(), 1);
        assert_eq!(unmatured.records()[0].serial, "ghijk");
        assert_eq!(unmatured.records()[0].note, "");
    }

    #[test]
    fn test_duplicate_requests_are_kept() {
        let fetcher =
            CannedFetcher::new(&[("abcdef", fixtures::bond_page(fixtures::MATURED_ROW))]);
        let requests = [request("abcdef"), request("abcdef")];

        let bonds = tokio_test::block_on(load_bonds(&fetcher, &requests)).unwrap();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds.records()[0], bonds.records()[1]);
    }

    #[test]
    fn test_invalid_page_aborts_batch() {
        let fetcher = CannedFetcher::new(&[
            ("bad", fixtures::ERROR_PAGE.to_string()),
            ("abcdef", fixtures::bond_page(fixtures::MATURED_ROW)),
        ]);

        let requests = [request("bad"), request("abcdef")];
        let result = tokio_test::block_on(load_bonds(&fetcher, &requests));

        match result {
            Err(AppError::Extraction { serial, source }) => {
                assert_eq!(serial, "bad");
                assert_eq!(source, ExtractError::InvalidDataReturned { expected: 11, found: 0 });
            }
            other => panic!("expected extraction error, got {:?}", other),
        }
        assert_eq!(*fetcher.calls.borrow(), vec!["bad".to_string()], "Stopped after the failure");
    }

    #[test]
    fn test_fetch_error_is_surfaced() {
        let fetcher = CannedFetcher::new(&[]);
        let result = tokio_test::block_on(fetch_bond(&fetcher, &request("missing")));

        assert!(matches!(
            result,
            Err(AppError::Treasury(TreasuryError::Http(status)))
                if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let fetcher = CannedFetcher::new(&[("abcdef", fixtures::bond_page(fixtures::SHORT_ROW))]);
        let result = tokio_test::block_on(fetch_bond(&fetcher, &request("abcdef")));

        assert!(matches!(
            result,
            Err(AppError::Extraction {
                source: ExtractError::InvalidDataReturned { found: 7, .. },
                ..
            })
        ));
    }
}
