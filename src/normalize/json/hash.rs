use crate::error::NormalizeError;
use crate::model::{Hash, HashDictionary};
use crate::normalize::{rules, skip_on_error, Json, Normalize, NormalizerFactory};
use serde_json::{json, Value};

impl Normalize<Hash> for NormalizerFactory<'_, Json> {
    type Output = Result<Value, NormalizeError>;

    fn normalize(&self, hash: &Hash) -> Self::Output {
        rules::check_hash(self.spec(), hash)?;
        Ok(json!({
            "alg": hash.algorithm.as_str(),
            "content": hash.content,
        }))
    }
}

impl Normalize<HashDictionary> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, hashes: &HashDictionary) -> Self::Output {
        let hashes: Vec<Hash> = hashes.iter().collect();
        skip_on_error(&hashes, "hash", |hash: &Hash| self.normalize(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HashAlgorithm;
    use crate::spec::{Spec, SpecVersion};

    #[test]
    fn test_hash_object() {
        let factory = NormalizerFactory::<Json>::new(Spec::for_version(SpecVersion::V1_2)).unwrap();
        let hash = Hash::new(HashAlgorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(
            factory.normalize(&hash).unwrap(),
            json!({"alg": "SHA-1", "content": "da39a3ee5e6b4b0d3255bfef95601890afd80709"})
        );
    }

    #[test]
    fn test_blake3_widths() {
        let factory = NormalizerFactory::<Json>::new(Spec::for_version(SpecVersion::V1_6)).unwrap();
        let dict = HashDictionary::new().with(HashAlgorithm::Blake3, "a".repeat(40));
        assert_eq!(factory.normalize(&dict).len(), 1);

        let dict = HashDictionary::new().with(HashAlgorithm::Blake3, "a".repeat(41));
        assert!(factory.normalize(&dict).is_empty());
    }
}
