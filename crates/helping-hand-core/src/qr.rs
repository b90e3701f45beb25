//! Payment QR codes
//!
//! The donate page shows a QR code carrying the bank transfer details as a
//! plain multi-line text block. The payer's camera or banking app reads the
//! text; nothing here talks to a payment system.

use crate::content::BankDetails;
use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

/// Pixel size of one QR module
pub const MODULE_SIZE: u32 = 10;

/// Light modules around the code on every side
pub const QUIET_ZONE: u32 = 4;

/// Line labels in display order
pub const PAYLOAD_LABELS: [&str; 6] = [
    "Получатель",
    "ИНН",
    "Счёт",
    "Банк",
    "БИК",
    "Назначение",
];

/// Format bank details into the six-line text encoded into the QR code.
///
/// The purpose line uses `purpose` when it is present and non-empty, falling
/// back to the bank's default purpose. Missing fields keep their line with an
/// empty value.
pub fn payment_payload(bank: &BankDetails, purpose: Option<&str>) -> String {
    payment_lines(bank, purpose).join("\n")
}

/// Same as [`payment_payload`], one entry per line
pub fn payment_lines(bank: &BankDetails, purpose: Option<&str>) -> Vec<String> {
    let purpose = purpose
        .filter(|p| !p.is_empty())
        .or(bank.purpose.as_deref());
    let values = [
        bank.beneficiary.as_deref(),
        bank.inn.as_deref(),
        bank.account.as_deref(),
        bank.bank_name.as_deref(),
        bank.bik.as_deref(),
        purpose,
    ];

    PAYLOAD_LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| format!("{}: {}", label, value.unwrap_or_default()))
        .collect()
}

/// Render `text` as a black-on-white PNG QR code
pub fn render_png(text: &str) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)?;
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * MODULE_SIZE;

    let img = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / MODULE_SIZE).checked_sub(QUIET_ZONE);
        let my = (y / MODULE_SIZE).checked_sub(QUIET_ZONE);
        let dark = match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                colors[(my * modules + mx) as usize] == Color::Dark
            }
            _ => false,
        };
        if dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Render `text` as a QR code embedded in a `data:` URL for an `<img src>`
pub fn data_url(text: &str) -> Result<String> {
    let png = render_png(text)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    fn bank() -> BankDetails {
        BankDetails {
            beneficiary: Some("АНО \"Рука помощи\"".to_string()),
            inn: Some("7700000000".to_string()),
            account: Some("40703810000000000001".to_string()),
            bank_name: Some("ПАО Сбербанк".to_string()),
            bik: Some("044525225".to_string()),
            purpose: Some("Благотворительное пожертвование".to_string()),
        }
    }

    fn decode_png(png: &[u8]) -> String {
        let img = image::load_from_memory_with_format(png, ImageFormat::Png)
            .unwrap()
            .to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            img.width() as usize,
            img.height() as usize,
            |x, y| img.get_pixel(x as u32, y as u32)[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR code");
        let (_, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn test_payload_lines_in_order() {
        let payload = payment_payload(&bank(), None);
        let lines: Vec<&str> = payload.split('\n').collect();

        assert_eq!(
            lines,
            vec![
                "Получатель: АНО \"Рука помощи\"",
                "ИНН: 7700000000",
                "Счёт: 40703810000000000001",
                "Банк: ПАО Сбербанк",
                "БИК: 044525225",
                "Назначение: Благотворительное пожертвование",
            ]
        );
    }

    #[test]
    fn test_payload_empty_bank() {
        let payload = payment_payload(&BankDetails::default(), None);

        assert_eq!(
            payload,
            "Получатель: \nИНН: \nСчёт: \nБанк: \nБИК: \nНазначение: "
        );
        assert_eq!(payload.split('\n').count(), 6);
    }

    #[test]
    fn test_payload_partial_bank_keeps_every_line() {
        let partial = BankDetails {
            account: Some("123".to_string()),
            ..Default::default()
        };
        let lines = payment_lines(&partial, None);

        assert_eq!(lines.len(), 6);
        for (line, label) in lines.iter().zip(PAYLOAD_LABELS) {
            assert!(line.starts_with(&format!("{}: ", label)));
        }
        assert_eq!(lines[2], "Счёт: 123");
        assert_eq!(lines[1], "ИНН: ");
    }

    #[test]
    fn test_purpose_override() {
        let payload = payment_payload(&bank(), Some("На лечение Маши"));
        assert!(payload.ends_with("\nНазначение: На лечение Маши"));

        let payload = payment_payload(&bank(), Some(""));
        assert!(payload.ends_with("\nНазначение: Благотворительное пожертвование"));

        let no_default = BankDetails {
            purpose: None,
            ..bank()
        };
        assert!(payment_payload(&no_default, None).ends_with("\nНазначение: "));
    }

    #[test]
    fn test_payload_is_deterministic() {
        let first = payment_payload(&bank(), Some("x"));
        for _ in 0..10 {
            assert_eq!(payment_payload(&bank(), Some("x")), first);
        }
    }

    #[test]
    fn test_qr_round_trip_payload() -> Result<()> {
        let payload = payment_payload(&bank(), Some("На лечение"));
        let png = render_png(&payload)?;
        assert_eq!(decode_png(&png), payload);
        Ok(())
    }

    #[test]
    fn test_qr_round_trip_empty() -> Result<()> {
        let png = render_png("")?;
        assert_eq!(decode_png(&png), "");
        Ok(())
    }

    #[test]
    fn test_qr_round_trip_long_text() -> Result<()> {
        let text = (0..8)
            .map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.len() > 200);

        let png = render_png(&text)?;
        assert_eq!(decode_png(&png), text);
        Ok(())
    }

    #[test]
    fn test_qr_has_quiet_zone() -> Result<()> {
        let png = render_png("hello")?;
        let img = image::load_from_memory(&png).unwrap().to_luma8();
        let border = QUIET_ZONE * MODULE_SIZE;

        assert_eq!(img.width(), img.height());
        assert_eq!(img.width() % MODULE_SIZE, 0);
        for i in 0..img.width() {
            for j in 0..border {
                assert_eq!(img.get_pixel(i, j)[0], 255);
                assert_eq!(img.get_pixel(j, i)[0], 255);
            }
        }
        Ok(())
    }

    #[test]
    fn test_text_too_long_for_any_version() {
        assert!(matches!(render_png(&"a".repeat(3000)), Err(SiteError::Qr(_))));
        assert!(matches!(data_url(&"a".repeat(3000)), Err(SiteError::Qr(_))));
    }

    #[test]
    fn test_data_url() -> Result<()> {
        let url = data_url("hello")?;
        let encoded = url
            .strip_prefix("data:image/png;base64,")
            .expect("data url prefix");
        let png = STANDARD.decode(encoded).unwrap();

        assert_eq!(png, render_png("hello")?);
        assert_eq!(decode_png(&png), "hello");
        Ok(())
    }
}
