use std::io::{Cursor, Read, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use image::DynamicImage;

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::error::{DxfError, DxfResult};
use crate::helpers::parse_hex_string;
use crate::CodePair;

const BITMAP_PALETTE_COUNT_OFFSET: usize = 32;

/// Reads the THUMBNAILIMAGE section body: a `90` byte count followed by
/// `310` hex chunks of BMP data with its 14-byte file header stripped.
/// Returns `None` when the image data can't be reconstructed.
pub(crate) fn read_thumbnail<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<Option<DynamicImage>>
where
    T: Read,
{
    // the declared length is not needed; the 310 chunks carry the data
    match iter.next() {
        Some(Ok(pair)) if pair.code == 90 => {
            let _declared_length = pair.assert_i32()?;
        }
        Some(Ok(pair)) => return Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
        Some(Err(e)) => return Err(e),
        None => return Err(DxfError::UnexpectedEndOfInput),
    }

    // re-synthesize the BMP file header the section leaves out
    let mut data: Vec<u8> = vec![
        b'B', b'M', // magic number
        0x00, 0x00, 0x00, 0x00, // file length; patched below
        0x00, 0x00, // reserved
        0x00, 0x00, // reserved
        0x00, 0x00, 0x00, 0x00, // image data offset; patched below
    ];
    let header_length = data.len();
    let file_length_offset = 2;
    let image_data_offset_offset = 10;

    loop {
        match iter.next() {
            Some(Ok(pair @ CodePair { code: 0, .. })) => {
                // likely 0/ENDSEC
                iter.put_back(Ok(pair));
                break;
            }
            Some(Ok(pair @ CodePair { code: 310, .. })) => {
                parse_hex_string(&pair.assert_string()?, &mut data, pair.offset)?;
            }
            Some(Ok(pair)) => return Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
            Some(Err(e)) => return Err(e),
            None => break,
        }
    }

    // patch the file length
    let mut length_bytes = vec![];
    length_bytes.write_i32::<LittleEndian>(data.len() as i32)?;
    data[file_length_offset..file_length_offset + 4].copy_from_slice(&length_bytes);

    if data.len() < header_length + 4 {
        return Ok(None);
    }
    let dib_header_size = LittleEndian::read_i32(&data[header_length..]) as usize;
    // BITMAPINFOHEADER and its V4/V5 extensions all carry the palette
    // color count at the same offset
    let palette_size = if dib_header_size >= BITMAP_PALETTE_COUNT_OFFSET + 4
        && data.len() >= header_length + BITMAP_PALETTE_COUNT_OFFSET + 4
    {
        let palette_color_count =
            LittleEndian::read_u32(&data[header_length + BITMAP_PALETTE_COUNT_OFFSET..]) as usize;
        palette_color_count * 4 // palette entries are always 4 bytes: BGRA
    } else {
        0
    };

    // patch the image data offset
    let image_data_offset = header_length + dib_header_size + palette_size;
    let mut offset_bytes = vec![];
    offset_bytes.write_i32::<LittleEndian>(image_data_offset as i32)?;
    data[image_data_offset_offset..image_data_offset_offset + 4].copy_from_slice(&offset_bytes);

    let image = image::load_from_memory(&data)?;
    Ok(Some(image))
}

/// Writes the THUMBNAILIMAGE section body as BMP data with the 14-byte
/// file header stripped, in 310 chunks of 128 bytes of hex.
pub(crate) fn write_thumbnail<T>(
    image: &DynamicImage,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()>
where
    T: Write,
{
    let mut data = vec![];
    image.write_to(&mut Cursor::new(&mut data), image::ImageOutputFormat::Bmp)?;
    let length = data.len() - 14; // the BMP file header is not written
    writer.write_code_pair(&CodePair::new_i32(90, length as i32))?;
    for chunk in data[14..].chunks(128) {
        let mut line = String::new();
        for b in chunk {
            line.push_str(&format!("{:02X}", b));
        }
        writer.write_code_pair(&CodePair::new_string(310, &line))?;
    }

    Ok(())
}
