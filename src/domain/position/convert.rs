//! Conversion: PositionResponse → Position, defaulting each field on its own.

use super::wire;
use super::Position;

impl From<wire::PositionResponse> for Position {
    fn from(source: wire::PositionResponse) -> Self {
        Position {
            execution_id: source.execution_id.unwrap_or_default(),
            account_type: source.account_type.unwrap_or_default(),
            symbol: source.symbol.unwrap_or_default(),
            symbol_name: source.symbol_name.unwrap_or_default(),
            exchange: source.exchange.unwrap_or_default(),
            exchange_name: source.exchange_name.unwrap_or_default(),
            security_type: source.security_type.unwrap_or_default(),
            execution_day: source.execution_day.unwrap_or_default(),
            price: source.price.unwrap_or_default(),
            leaves_qty: source.leaves_qty.unwrap_or_default(),
            hold_qty: source.hold_qty.unwrap_or_default(),
            side: source.side.unwrap_or_default(),
            expenses: source.expenses.unwrap_or_default(),
            commission: source.commission.unwrap_or_default(),
            commission_tax: source.commission_tax.unwrap_or_default(),
            expire_day: source.expire_day.unwrap_or_default(),
            margin_trade_type: source.margin_trade_type.unwrap_or_default(),
            current_price: source.current_price.unwrap_or_default(),
            valuation: source.valuation.unwrap_or_default(),
            profit_loss: source.profit_loss.unwrap_or_default(),
            profit_loss_rate: source.profit_loss_rate.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_position() {
        let json = r#"
            {
                "ExecutionID": "E20220404xxxxx",
                "AccountType": 4,
                "Symbol": "8306",
                "SymbolName": "三菱ＵＦＪフィナンシャル・グループ",
                "Exchange": 1,
                "ExchangeName": "東証プ",
                "ExecutionDay": 20220404,
                "Price": 704,
                "LeavesQty": 500,
                "HoldQty": 0,
                "Side": "1",
                "Expenses": 0,
                "Commission": 1620,
                "CommissionTax": 162,
                "ExpireDay": 20220404,
                "MarginTradeType": 1,
                "CurrentPrice": 414.5,
                "Valuation": 207250,
                "ProfitLoss": 144750,
                "ProfitLossRate": 41.12215909090909
            }
        "#;
        let wire: wire::PositionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(wire.execution_id.as_deref(), Some("E20220404xxxxx"));
        assert_eq!(wire.security_type, None);

        let position = Position::from(wire);
        assert_eq!(position.account_type, 4);
        assert_eq!(position.symbol, "8306");
        assert_eq!(position.exchange_name, "東証プ");
        assert_eq!(position.execution_day, 20220404);
        assert_eq!(position.price, 704.0);
        assert_eq!(position.leaves_qty, 500.0);
        assert_eq!(position.commission, 1620.0);
        assert_eq!(position.current_price, 414.5);
        assert_eq!(position.profit_loss_rate, 41.12215909090909);
        assert_eq!(position.security_type, 0);
    }

    #[test]
    fn test_empty_position_defaults_every_field() {
        let wire: wire::PositionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(Position::from(wire), Position::default());
    }

    #[test]
    fn test_nulls_default_independently() {
        let json = r#"{"AccountType": null, "Symbol": "7203", "Price": null, "HoldQty": 100}"#;
        let position = Position::from(serde_json::from_str::<wire::PositionResponse>(json).unwrap());
        assert_eq!(position.account_type, 0);
        assert_eq!(position.symbol, "7203");
        assert_eq!(position.price, 0.0);
        assert_eq!(position.hold_qty, 100.0);
        assert_eq!(position.symbol_name, "");
    }
}
