use serde_json::Value;

use crate::{
    endpoints::misc as paths,
    query::{FiatMapQuery, Params, PriceConversionQuery},
    types::{Fiat, KeyInfo, OneOrMany, PriceConversion, Response},
    Client, Error,
};

/// Fiat map, price conversion and account endpoints.
#[derive(Clone, Copy)]
pub struct MiscRepository<'a> {
    client: &'a Client,
}

impl<'a> MiscRepository<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the id map of supported fiat currencies.
    pub async fn fiat_map(&self, query: &FiatMapQuery) -> Result<Response<Vec<Fiat>>, Error> {
        self.client.send(paths::FIAT_MAP, Some(query)).await
    }

    /// Converts an amount of one currency into one or more others. Symbol
    /// lookups return every asset sharing the symbol.
    pub async fn price_conversion(
        &self,
        query: &PriceConversionQuery,
    ) -> Result<Response<OneOrMany<PriceConversion>>, Error> {
        self.client.send(paths::PRICE_CONVERSION, Some(query)).await
    }

    /// Fetches plan limits and credit usage for the configured key.
    pub async fn key_info(&self) -> Result<Response<KeyInfo>, Error> {
        self.client.send(paths::KEY_INFO, None::<&Params>).await
    }

    /// Fetches the Postman collection describing the API. The body is
    /// returned as-is since it carries no envelope.
    pub async fn postman(&self) -> Result<Value, Error> {
        self.client.send_raw(paths::POSTMAN, None::<&Params>).await
    }
}
