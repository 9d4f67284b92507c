/// Report shown before any photo has been analysed.
///
/// A complete example of the format the default prompt produces: a pink
/// keyhole-collar top identified as Zara at 85% confidence.
pub const SAMPLE_REPORT: &str = r#"## Outfit Analysis

### Brand Identification
🏷️ **Verdict: Zara Essential Collection (85% confidence)**

This appears to be a light pink keyhole collar top from Zara's Essential Collection based on the clean silhouette, collar design, and fabric appearance.

### Style Details

1. **Design Elements:**
   - Light pink/blush short-sleeved top with a collared neckline
   - Distinctive keyhole/teardrop cutout below the collar
   - Fitted silhouette with structured shoulder design
   - Clean minimalist design typical of contemporary business casual wear
   - Short sleeves with a slightly tailored cut

2. **Material Analysis:**
   - Appears to be a polyester-elastane blend with slight stretch
   - Matte finish with slight texture suggesting a premium quality fabric
   - Medium-weight fabric that holds its shape well
   - Likely wrinkle-resistant material suitable for office wear

3. **Color Profile:**
   - Soft blush pink (Pantone 12-1310 or similar)
   - Flattering neutral-warm undertone that works well with multiple skin tones
   - Part of the current season's pastel palette

4. **Styling Category:**
   - Business casual office wear
   - Contemporary minimalist aesthetic
   - Spring/Summer seasonal piece
   - Versatile foundation garment

### Where to Purchase

1. **Exact Match:**
   - **Zara**: "Collared Keyhole Top" - $35.90 - Available online and in stores
   - **Zara Collection ID**: Likely from their spring/summer essentials line

2. **Similar Options:**
   - **H&M**: "Keyhole Collared Blouse" - $24.99
   - **Mango**: "Essential Collar Top" - $39.99
   - **ASOS Design**: "Clean Collar Tee with Cutout Detail" - $28.00
   - **Express**: "Solid Keyhole Collar Top" - $44.50 (often on sale for $29.99)

3. **Budget Alternatives:**
   - **Shein**: "Minimalist Collar Top" - $12.99
   - **Forever 21**: "Collared Keyhole Tee" - $17.99

4. **Premium Versions:**
   - **COS**: "Tailored Collar Top" - $69.00
   - **& Other Stories**: "Structured Collar Blouse" - $79.00

### Styling Suggestions

1. **Office/Professional:**
   - Pair with high-waisted gray trousers and nude pumps
   - Add a structured blazer in navy or charcoal
   - Accessorize with minimal gold jewelry and a leather tote

2. **Casual Daytime:**
   - Style with white wide-leg jeans or denim shorts
   - Add espadrille sandals and a straw tote
   - Layer delicate necklaces for dimension

3. **Evening Out:**
   - Tuck into a metallic pleated skirt
   - Add strappy heeled sandals and statement earrings
   - Elevate with a clutch bag and red lip

4. **Color Pairing Suggestions:**
   - Navy, gray, white, olive green, or burgundy bottoms
   - Gold, rose gold, or silver accessories
   - Nude, white, or black footwear

### Care Instructions
- Machine wash cold with similar colors
- Gentle cycle recommended
- Low heat tumble dry or lay flat to dry
- Cool iron if needed
- Avoid bleach and harsh detergents
- Consider hanging to prevent wrinkles

This versatile top can be dressed up or down for multiple occasions, making it a great addition to a capsule wardrobe. The neutral pink tone and professional silhouette offer excellent styling flexibility while maintaining a polished appearance."#;
