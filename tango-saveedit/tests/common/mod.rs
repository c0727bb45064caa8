use tango_saveedit::save;

/// A zeroed raw save carrying `marker` with a checksum that `variant` accepts.
pub fn raw_save(format: &save::Format, marker: &[u8; 20], variant: &save::Variant) -> Vec<u8> {
    let mut raw = vec![0u8; format.raw_size];
    raw[format.marker_offset..format.marker_offset + 20].copy_from_slice(marker);
    fix_checksum(format, &mut raw, variant);
    raw
}

pub fn fix_checksum(format: &save::Format, raw: &mut [u8], variant: &save::Variant) {
    let shift = format.shift(raw).unwrap();
    let checksum = format.compute_checksum(raw, shift, variant).unwrap();
    let offset = shift + format.checksum_offset;
    raw[offset..offset + 4].copy_from_slice(&checksum.to_le_bytes());
}
