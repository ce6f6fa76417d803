//! bitFlyer use cases: markets, board, balances, order creation.

use crate::domain::balance::wire::BalancesResponse;
use crate::domain::balance::Balance;
use crate::domain::board::wire::BoardResponse;
use crate::domain::board::Board;
use crate::domain::market::wire::MarketsResponse;
use crate::domain::market::Market;
use crate::domain::order::wire::{OrderResponse, SendChildOrderRequest};
use crate::domain::order::{CreateOrder, OrderAcceptance};
use crate::error::{HttpError, SdkError};

/// What the bitFlyer use cases need from a client.
#[allow(async_fn_in_trait)]
pub trait BitFlyerApi {
    async fn get_markets(&self) -> Result<MarketsResponse, HttpError>;
    async fn get_board(&self, product_code: &str) -> Result<BoardResponse, HttpError>;
    async fn get_balance(&self) -> Result<BalancesResponse, HttpError>;
    async fn send_child_order(
        &self,
        request: &SendChildOrderRequest,
    ) -> Result<OrderResponse, HttpError>;
}

pub struct BitFlyerUseCase<C> {
    client: C,
}

impl<C: BitFlyerApi> BitFlyerUseCase<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn markets(&self) -> Result<Vec<Market>, SdkError> {
        let markets = self
            .client
            .get_markets()
            .await
            .map_err(SdkError::context("failed to fetch markets"))?;
        Ok(markets.into_iter().map(Market::from).collect())
    }

    /// Board in venue order; no sorting here.
    pub async fn board(&self, product_code: &str) -> Result<Board, SdkError> {
        let board = self
            .client
            .get_board(product_code)
            .await
            .map_err(SdkError::context("failed to fetch board"))?;
        Ok(board.into())
    }

    pub async fn balances(&self) -> Result<Vec<Balance>, SdkError> {
        let balances = self
            .client
            .get_balance()
            .await
            .map_err(SdkError::context("failed to fetch balance"))?;
        Ok(balances.into_iter().map(Balance::from).collect())
    }

    /// Send a GTC limit order.
    pub async fn create_order(&self, order: &CreateOrder) -> Result<OrderAcceptance, SdkError> {
        let request = SendChildOrderRequest::from(order);
        tracing::debug!(
            product_code = %request.product_code,
            side = %request.side,
            "Sending child order"
        );
        let response = self
            .client
            .send_child_order(&request)
            .await
            .map_err(SdkError::context("failed to send order"))?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balance::wire::BalanceResponse;
    use crate::domain::board::wire::PriceResponse;
    use crate::domain::board::PriceLevel;
    use crate::domain::market::wire::MarketResponse;
    use crate::error::ErrorKind;
    use crate::shared::Side;
    use std::cell::RefCell;

    /// Test double: each endpoint answers with a canned result.
    #[derive(Default)]
    struct MockBitFlyer {
        markets: Option<MarketsResponse>,
        board: Option<BoardResponse>,
        balances: Option<BalancesResponse>,
        fail_with: Option<u16>,
        sent: RefCell<Vec<SendChildOrderRequest>>,
    }

    impl MockBitFlyer {
        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), HttpError> {
            match self.fail_with {
                Some(status) => Err(HttpError::from_status(status, "mock".to_string())),
                None => Ok(()),
            }
        }
    }

    impl BitFlyerApi for MockBitFlyer {
        async fn get_markets(&self) -> Result<MarketsResponse, HttpError> {
            self.check()?;
            Ok(self.markets.clone().unwrap_or_default())
        }

        async fn get_board(&self, _product_code: &str) -> Result<BoardResponse, HttpError> {
            self.check()?;
            Ok(self.board.clone().expect("board not configured"))
        }

        async fn get_balance(&self) -> Result<BalancesResponse, HttpError> {
            self.check()?;
            Ok(self.balances.clone().unwrap_or_default())
        }

        async fn send_child_order(
            &self,
            request: &SendChildOrderRequest,
        ) -> Result<OrderResponse, HttpError> {
            self.check()?;
            if request.product_code.is_empty() || request.size == 0.0 || request.price == 0.0 {
                return Err(HttpError::from_status(400, "invalid order".to_string()));
            }
            self.sent.borrow_mut().push(request.clone());
            Ok(OrderResponse {
                child_order_acceptance_id: "test_id".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_markets() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer {
            markets: Some(vec![MarketResponse {
                product_code: "TEST_PRODUCT".to_string(),
                market_type: "Market".to_string(),
                alias: "TST".to_string(),
            }]),
            ..MockBitFlyer::default()
        });

        let markets = usecase.markets().await.unwrap();
        assert_eq!(
            markets,
            vec![Market {
                product_code: "TEST_PRODUCT".to_string(),
                alias: "TST".to_string(),
                market_type: "Market".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_markets_error_keeps_kind() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer::failing(401));
        let err = usecase.markets().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(err.to_string().starts_with("failed to fetch markets"));
    }

    #[tokio::test]
    async fn test_board() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer {
            board: Some(BoardResponse {
                mid_price: 100.5,
                bids: vec![PriceResponse { price: 10.2, size: 5.4 }],
                asks: vec![
                    PriceResponse { price: 9.8, size: 6.2 },
                    PriceResponse { price: 11.0, size: 1.0 },
                ],
            }),
            ..MockBitFlyer::default()
        });

        let board = usecase.board("TST").await.unwrap();
        assert_eq!(
            board,
            Board {
                mid_price: 100.5,
                asks: vec![
                    PriceLevel { price: 9.8, size: 6.2 },
                    PriceLevel { price: 11.0, size: 1.0 },
                ],
                bids: vec![PriceLevel { price: 10.2, size: 5.4 }],
            }
        );
    }

    #[tokio::test]
    async fn test_board_error_keeps_kind() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer::failing(404));
        let err = usecase.board("TST").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_balances() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer {
            balances: Some(vec![BalanceResponse {
                currency_code: "JPY".to_string(),
                amount: 10000.0,
                available: 39.48,
            }]),
            ..MockBitFlyer::default()
        });

        let balances = usecase.balances().await.unwrap();
        assert_eq!(
            balances,
            vec![Balance {
                currency_code: "JPY".to_string(),
                amount: 10000.0,
                available: 39.48,
            }]
        );
    }

    #[tokio::test]
    async fn test_balances_error_keeps_kind() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer::failing(500));
        let err = usecase.balances().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn test_create_order() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer::default());
        let acceptance = usecase
            .create_order(&CreateOrder {
                product_code: "TEST_TOKEN".to_string(),
                price: 10242.0,
                size: 10.5,
                buy: false,
            })
            .await
            .unwrap();
        assert_eq!(acceptance.acceptance_id, "test_id");

        let sent = usecase.client().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].side, Side::Sell);
        assert_eq!(sent[0].price, 10242.0);
        assert_eq!(sent[0].size, 10.5);
    }

    #[tokio::test]
    async fn test_create_order_rejected() {
        let usecase = BitFlyerUseCase::new(MockBitFlyer::default());
        let err = usecase
            .create_order(&CreateOrder {
                product_code: String::new(),
                price: 0.0,
                size: 0.0,
                buy: true,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.to_string().starts_with("failed to send order"));
    }
}
