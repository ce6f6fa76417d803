//! kabucom use cases: authorization and positions ("balances").

use crate::domain::position::wire::PositionsResponse;
use crate::domain::position::{Position, PositionQuery};
use crate::error::{HttpError, SdkError};

/// What the kabucom use cases need from a client.
#[allow(async_fn_in_trait)]
pub trait KabucomApi {
    async fn get_token(&self, password: &str) -> Result<String, HttpError>;
    async fn get_positions(
        &self,
        api_key: &str,
        query: &PositionQuery,
    ) -> Result<PositionsResponse, HttpError>;
}

pub struct KabucomUseCase<C> {
    client: C,
}

impl<C: KabucomApi> KabucomUseCase<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Exchange the API password for a token.
    pub async fn authorize(&self, password: &str) -> Result<String, SdkError> {
        self.client
            .get_token(password)
            .await
            .map_err(SdkError::context("failed to authorize"))
    }

    /// Positions for `token`, each field resolved to a concrete value.
    pub async fn balances(
        &self,
        token: &str,
        query: &PositionQuery,
    ) -> Result<Vec<Position>, SdkError> {
        let positions = self
            .client
            .get_positions(token, query)
            .await
            .map_err(SdkError::context("failed to get balance"))?;
        Ok(positions.into_iter().map(Position::from).collect())
    }
}
