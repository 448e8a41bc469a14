pub mod order {
    use serde::{Deserialize, Serialize};

    /// Bill tendered by a customer.
    ///
    /// Encoded as the bare face value. Decoding anything other than 5, 10
    /// or 20 fails, so an invalid bill never reaches the engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "i64", into = "i64")]
    pub enum BillValue {
        Five,
        Ten,
        Twenty,
    }

    impl TryFrom<i64> for BillValue {
        type Error = String;

        fn try_from(value: i64) -> Result<Self, Self::Error> {
            match value {
                5 => Ok(Self::Five),
                10 => Ok(Self::Ten),
                20 => Ok(Self::Twenty),
                other => Err(format!(
                    "Invalid bill value: {other}. Accepted values are 5, 10, or 20."
                )),
            }
        }
    }

    impl From<BillValue> for i64 {
        fn from(value: BillValue) -> Self {
            match value {
                BillValue::Five => 5,
                BillValue::Ten => 10,
                BillValue::Twenty => 20,
            }
        }
    }

    /// One customer of a batch.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderNew {
        pub bill_value: BillValue,
        pub position_in_line: i64,
        pub requested_lemonades: u32,
    }

    /// Body of `POST /api/orders/process`.
    ///
    /// Both the batch and its elements may be `null`; such batches are
    /// answered with `null` rather than a decoding error.
    pub type OrderBatch = Option<Vec<Option<OrderNew>>>;
}

pub mod error {
    use serde::{Deserialize, Serialize};

    /// Body of every error response.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorBody {
        pub status: u16,
        pub message: String,
    }
}
