use super::XmlElement;
use crate::error::NormalizeError;
use crate::model::{Hash, HashDictionary};
use crate::normalize::{rules, skip_on_error, Normalize, NormalizerFactory, Xml};

impl Normalize<Hash> for NormalizerFactory<'_, Xml> {
    type Output = Result<XmlElement, NormalizeError>;

    fn normalize(&self, hash: &Hash) -> Self::Output {
        rules::check_hash(self.spec(), hash)?;
        Ok(XmlElement::text_element("hash", hash.content.as_str())
            .with_attribute("alg", hash.algorithm.as_str()))
    }
}

impl Normalize<HashDictionary> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

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

    const MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";
    const SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Xml> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    #[test]
    fn test_hash_element() {
        let element = factory(SpecVersion::V1_4)
            .normalize(&Hash::new(HashAlgorithm::Md5, MD5))
            .unwrap();
        assert_eq!(element.name(), "hash");
        assert_eq!(element.attribute("alg"), Some("MD5"));
        assert_eq!(element.text(), MD5);
    }

    #[test]
    fn test_dictionary_skips_bad_pairs() {
        let dict = HashDictionary::new()
            .with(HashAlgorithm::Md5, MD5)
            .with(HashAlgorithm::Sha256, "too-short")
            .with(HashAlgorithm::Blake3, SHA1)
            .with(HashAlgorithm::Sha1, SHA1);

        let elements = factory(SpecVersion::V1_1).normalize(&dict);
        let algorithms: Vec<_> = elements.iter().filter_map(|e| e.attribute("alg")).collect();
        // BLAKE3 is unknown to 1.1, SHA-256 content has the wrong shape
        assert_eq!(algorithms, vec!["MD5", "SHA-1"]);
    }
}
