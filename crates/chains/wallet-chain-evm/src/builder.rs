//! The EVM transaction builder (`spec.md` §4.6).

use crate::error::EvmError;
use crate::types::{
    Eip1559Tx, Eip7702Tx, GasPricing, LegacyTx, TxIntent, TypeHint, UnsignedTransaction,
};

/// Builds an [`UnsignedTransaction`] from a [`TxIntent`], choosing an
/// envelope either from `type_hint` or by inferring one from the fields
/// present (an authorization list implies EIP-7702; EIP-1559 gas pricing
/// implies type 2; otherwise legacy).
pub fn build(intent: TxIntent) -> Result<UnsignedTransaction, EvmError> {
    let inferred = if !intent.authorization_list.is_empty() {
        TypeHint::Eip7702
    } else {
        match intent.gas_pricing {
            GasPricing::Eip1559 { .. } => TypeHint::Eip1559,
            GasPricing::Legacy { .. } => TypeHint::Legacy,
        }
    };
    let hint = intent.type_hint.unwrap_or(inferred);

    if !intent.authorization_list.is_empty() && hint != TypeHint::Eip7702 {
        return Err(EvmError::AuthorizationRequiresEip7702);
    }

    match hint {
        TypeHint::Legacy => {
            let GasPricing::Legacy { gas_price } = intent.gas_pricing else {
                return Err(EvmError::IncompatibleTypeHint { hint });
            };
            Ok(UnsignedTransaction::Legacy(LegacyTx {
                nonce: intent.nonce,
                gas_price,
                gas_limit: intent.gas_limit,
                to: intent.to,
                value: intent.value,
                data: intent.data,
                chain_id: intent.chain_id,
            }))
        }
        TypeHint::Eip1559 => {
            let GasPricing::Eip1559 { max_fee_per_gas, max_priority_fee_per_gas } =
                intent.gas_pricing
            else {
                return Err(EvmError::IncompatibleTypeHint { hint });
            };
            Ok(UnsignedTransaction::Eip1559(Eip1559Tx {
                chain_id: intent.chain_id,
                nonce: intent.nonce,
                max_priority_fee_per_gas,
                max_fee_per_gas,
                gas_limit: intent.gas_limit,
                to: intent.to,
                value: intent.value,
                data: intent.data,
                access_list: intent.access_list,
            }))
        }
        TypeHint::Eip7702 => {
            let GasPricing::Eip1559 { max_fee_per_gas, max_priority_fee_per_gas } =
                intent.gas_pricing
            else {
                return Err(EvmError::IncompatibleTypeHint { hint });
            };
            Ok(UnsignedTransaction::Eip7702(Eip7702Tx {
                chain_id: intent.chain_id,
                nonce: intent.nonce,
                max_priority_fee_per_gas,
                max_fee_per_gas,
                gas_limit: intent.gas_limit,
                to: intent.to,
                value: intent.value,
                data: intent.data,
                access_list: intent.access_list,
                authorization_list: intent.authorization_list,
            }))
        }
    }
}
