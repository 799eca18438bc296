//! The Cosmos SDK transaction builder (`spec.md` §4.6): assembles a
//! protobuf-encoded `TxBody`/`AuthInfo` pair for a single-signer,
//! `SIGN_MODE_DIRECT` transaction via `cosmrs`, the same crate
//! `MANTRA-Chain-mantra-dex-sdk`'s and `poroburu-ic-cosmos`'s wallet layers
//! build `Body`/`SignerInfo`/`AuthInfo`/`SignDoc` with.

use std::str::FromStr;

use cosmrs::tx::{AuthInfo, Body as CosmosBody, BodyBuilder, Fee as CosmosFee, SignerInfo};
use cosmrs::{AccountId, Any, Coin as CosmosCoin, Denom};

use crate::error::CosmosError;
use crate::types::{AnyMessage, Coin, Fee, TxIntent, UnsignedSignDoc};

fn to_any(msg: &AnyMessage) -> Any {
    Any {
        type_url: msg.type_url.clone(),
        value: msg.value.clone(),
    }
}

fn to_cosmos_coin(coin: &Coin) -> Result<CosmosCoin, CosmosError> {
    let denom = Denom::from_str(&coin.denom).map_err(|e| CosmosError::Cosmrs(e.to_string()))?;
    let amount = coin
        .amount
        .parse::<u128>()
        .map_err(|e| CosmosError::InvalidAmount(e.to_string()))?;
    Ok(CosmosCoin { denom, amount })
}

fn optional_account_id(address: &str) -> Result<Option<AccountId>, CosmosError> {
    if address.is_empty() {
        return Ok(None);
    }
    AccountId::from_str(address)
        .map(Some)
        .map_err(|e| CosmosError::Cosmrs(e.to_string()))
}

fn to_cosmos_fee(fee: &Fee) -> Result<CosmosFee, CosmosError> {
    let amount = fee
        .amount
        .iter()
        .map(to_cosmos_coin)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CosmosFee {
        amount,
        gas_limit: fee.gas_limit,
        payer: optional_account_id(&fee.payer)?,
        granter: optional_account_id(&fee.granter)?,
    })
}

fn build_body(intent: &TxIntent) -> Result<CosmosBody, CosmosError> {
    let msgs: Vec<Any> = intent.messages.iter().map(to_any).collect();
    let mut builder = BodyBuilder::new();
    builder.msgs(msgs);
    if !intent.memo.is_empty() {
        builder.memo(intent.memo.clone());
    }
    if intent.timeout_height != 0 {
        // `BodyBuilder::timeout_height` takes `u32`; Cosmos block heights
        // never approach that ceiling in practice.
        builder.timeout_height(intent.timeout_height as u32);
    }
    Ok(builder.finish())
}

fn build_auth_info(intent: &TxIntent) -> Result<AuthInfo, CosmosError> {
    // `cosmrs` re-exports `k256` precisely so callers can build a `PublicKey`
    // from raw SEC1 bytes without pulling in a second copy of the crate.
    let verifying_key = cosmrs::k256::ecdsa::VerifyingKey::from_sec1_bytes(&intent.public_key_compressed)
        .map_err(|e| CosmosError::Cosmrs(e.to_string()))?;
    let public_key = cosmrs::crypto::PublicKey::from(verifying_key);
    let signer_info = SignerInfo::single_direct(Some(public_key), intent.sequence);
    let fee = to_cosmos_fee(&intent.fee)?;
    Ok(signer_info.auth_info(fee))
}

/// Builds the protobuf-encoded `TxBody` and `AuthInfo` for `intent`.
pub fn build(intent: TxIntent) -> Result<UnsignedSignDoc, CosmosError> {
    if intent.messages.is_empty() {
        return Err(CosmosError::EmptyMessageList);
    }
    let body = build_body(&intent)?;
    let auth_info = build_auth_info(&intent)?;
    Ok(UnsignedSignDoc {
        body_bytes: body.into_bytes().map_err(|e| CosmosError::Cosmrs(e.to_string()))?,
        auth_info_bytes: auth_info
            .into_bytes()
            .map_err(|e| CosmosError::Cosmrs(e.to_string()))?,
        chain_id: intent.chain_id,
        account_number: intent.account_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_intent() -> TxIntent {
        // The secp256k1 generator point `G`, compressed: a valid curve point
        // for any test that round-trips through `k256`'s SEC1 parser.
        let g = hex::decode(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        )
        .unwrap();
        let mut public_key_compressed = [0u8; 33];
        public_key_compressed.copy_from_slice(&g);

        TxIntent {
            messages: vec![AnyMessage {
                type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
                value: vec![1, 2, 3],
            }],
            memo: "hello".to_string(),
            timeout_height: 0,
            fee: Fee {
                amount: vec![Coin { denom: "uatom".to_string(), amount: "5000".to_string() }],
                gas_limit: 200_000,
                payer: String::new(),
                granter: String::new(),
            },
            public_key_compressed,
            sequence: 7,
            chain_id: "cosmoshub-4".to_string(),
            account_number: 42,
        }
    }

    #[test]
    fn rejects_empty_message_list() {
        let mut intent = sample_intent();
        intent.messages.clear();
        assert_eq!(build(intent), Err(CosmosError::EmptyMessageList));
    }

    #[test]
    fn builds_non_empty_body_and_auth_info() {
        let intent = sample_intent();
        let doc = build(intent).unwrap();
        assert!(!doc.body_bytes.is_empty());
        assert!(!doc.auth_info_bytes.is_empty());
        assert_eq!(doc.chain_id, "cosmoshub-4");
        assert_eq!(doc.account_number, 42);
    }

    #[test]
    fn is_deterministic() {
        let a = build(sample_intent()).unwrap();
        let b = build(sample_intent()).unwrap();
        assert_eq!(a.body_bytes, b.body_bytes);
        assert_eq!(a.auth_info_bytes, b.auth_info_bytes);
    }

    #[test]
    fn rejects_malformed_coin_amount() {
        let mut intent = sample_intent();
        intent.fee.amount[0].amount = "not-a-number".to_string();
        assert!(matches!(build(intent), Err(CosmosError::InvalidAmount(_))));
    }
}
