pub(crate) mod connect;
pub(crate) mod emerge;
pub(crate) mod leaves;
pub(crate) mod replay;
