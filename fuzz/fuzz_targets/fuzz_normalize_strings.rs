#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_normalizer::model::{
    Bom, Component, ComponentType, ExternalReference, ExternalReferenceType, HashAlgorithm,
    HashDictionary, License, LicenseAcknowledgement, LicenseRepository, NamedLicense, Property,
};
use sbom_normalizer::serialize::{JsonSerializer, Serializer, XmlSerializer};
use sbom_normalizer::spec::{Format, Spec, SpecVersion};

/// Fuzz both backends with arbitrary leaf strings.
///
/// Splits the input on NUL into names, digests, URLs and license values and
/// checks that every version renders without panicking. Only a JSON/1.1
/// combination may fail.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = s.split('\0');
    let mut next = || parts.next().unwrap_or_default().to_string();

    let name = next();
    let digest = next();
    let url = next();
    let license = next();
    let serial = next();

    let component = Component::new(ComponentType::Library, name.clone())
        .with_bom_ref(name.clone())
        .with_hashes(
            HashDictionary::new()
                .with(HashAlgorithm::Sha256, digest.clone())
                .with(HashAlgorithm::Blake3, digest),
        )
        .with_licenses(
            LicenseRepository::new()
                .with(License::spdx(license.clone()))
                .with(License::Named(NamedLicense::new(license.clone()).with_url(url.clone()))),
        )
        .with_external_reference(ExternalReference::new(ExternalReferenceType::Website, url))
        .with_property(Property::new(name.clone(), serial.clone()));
    let expressed = component.clone().with_licenses(LicenseRepository::new().with(
        License::expression(license).acknowledged(LicenseAcknowledgement::Declared),
    ));
    let bom = Bom::new()
        .with_serial_number(serial)
        .with_component(component)
        .with_component(expressed);

    for version in SpecVersion::ALL {
        let xml = XmlSerializer::new(version).serialize(&bom);
        assert!(xml.is_ok(), "XML {version}: {xml:?}");

        let json = JsonSerializer::new(version).serialize(&bom);
        let expected = Spec::for_version(version).supports_format(Format::Json);
        assert_eq!(json.is_ok(), expected, "JSON {version}");
    }
});
