// vkscript
//
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! The features that can be listed in a `[require]` section.

use serde::{Serialize, Serializer};
use std::fmt;

/// A requirement that a script can place on the device. Most of
/// these are the members of `VkPhysicalDeviceFeatures`. The last four
/// are the special requirements that take an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    RobustBufferAccess,
    FullDrawIndexUint32,
    ImageCubeArray,
    IndependentBlend,
    GeometryShader,
    TessellationShader,
    SampleRateShading,
    DualSrcBlend,
    LogicOp,
    MultiDrawIndirect,
    DrawIndirectFirstInstance,
    DepthClamp,
    DepthBiasClamp,
    FillModeNonSolid,
    DepthBounds,
    WideLines,
    LargePoints,
    AlphaToOne,
    MultiViewport,
    SamplerAnisotropy,
    TextureCompressionEtc2,
    TextureCompressionAstcLdr,
    TextureCompressionBc,
    OcclusionQueryPrecise,
    PipelineStatisticsQuery,
    VertexPipelineStoresAndAtomics,
    FragmentStoresAndAtomics,
    ShaderTessellationAndGeometryPointSize,
    ShaderImageGatherExtended,
    ShaderStorageImageExtendedFormats,
    ShaderStorageImageMultisample,
    ShaderStorageImageReadWithoutFormat,
    ShaderStorageImageWriteWithoutFormat,
    ShaderUniformBufferArrayDynamicIndexing,
    ShaderSampledImageArrayDynamicIndexing,
    ShaderStorageBufferArrayDynamicIndexing,
    ShaderStorageImageArrayDynamicIndexing,
    ShaderClipDistance,
    ShaderCullDistance,
    ShaderFloat64,
    ShaderInt64,
    ShaderInt16,
    ShaderResourceResidency,
    ShaderResourceMinLod,
    SparseBinding,
    SparseResidencyBuffer,
    SparseResidencyImage2D,
    SparseResidencyImage3D,
    SparseResidency2Samples,
    SparseResidency4Samples,
    SparseResidency8Samples,
    SparseResidency16Samples,
    SparseResidencyAliased,
    VariableMultisampleRate,
    InheritedQueries,
    Framebuffer,
    DepthStencil,
    FramebufferSize,
    VulkanVersion,
}

/// The number of `VkPhysicalDeviceFeatures` members.
pub const N_DEVICE_FEATURES: usize = 55;

// Sorted by name so that it can be used with a binary search
static DEVICE_FEATURES: [(&str, Feature); N_DEVICE_FEATURES] = [
    ("alphaToOne", Feature::AlphaToOne),
    ("depthBiasClamp", Feature::DepthBiasClamp),
    ("depthBounds", Feature::DepthBounds),
    ("depthClamp", Feature::DepthClamp),
    ("drawIndirectFirstInstance", Feature::DrawIndirectFirstInstance),
    ("dualSrcBlend", Feature::DualSrcBlend),
    ("fillModeNonSolid", Feature::FillModeNonSolid),
    ("fragmentStoresAndAtomics", Feature::FragmentStoresAndAtomics),
    ("fullDrawIndexUint32", Feature::FullDrawIndexUint32),
    ("geometryShader", Feature::GeometryShader),
    ("imageCubeArray", Feature::ImageCubeArray),
    ("independentBlend", Feature::IndependentBlend),
    ("inheritedQueries", Feature::InheritedQueries),
    ("largePoints", Feature::LargePoints),
    ("logicOp", Feature::LogicOp),
    ("multiDrawIndirect", Feature::MultiDrawIndirect),
    ("multiViewport", Feature::MultiViewport),
    ("occlusionQueryPrecise", Feature::OcclusionQueryPrecise),
    ("pipelineStatisticsQuery", Feature::PipelineStatisticsQuery),
    ("robustBufferAccess", Feature::RobustBufferAccess),
    ("sampleRateShading", Feature::SampleRateShading),
    ("samplerAnisotropy", Feature::SamplerAnisotropy),
    ("shaderClipDistance", Feature::ShaderClipDistance),
    ("shaderCullDistance", Feature::ShaderCullDistance),
    ("shaderFloat64", Feature::ShaderFloat64),
    ("shaderImageGatherExtended", Feature::ShaderImageGatherExtended),
    ("shaderInt16", Feature::ShaderInt16),
    ("shaderInt64", Feature::ShaderInt64),
    ("shaderResourceMinLod", Feature::ShaderResourceMinLod),
    ("shaderResourceResidency", Feature::ShaderResourceResidency),
    ("shaderSampledImageArrayDynamicIndexing", Feature::ShaderSampledImageArrayDynamicIndexing),
    ("shaderStorageBufferArrayDynamicIndexing", Feature::ShaderStorageBufferArrayDynamicIndexing),
    ("shaderStorageImageArrayDynamicIndexing", Feature::ShaderStorageImageArrayDynamicIndexing),
    ("shaderStorageImageExtendedFormats", Feature::ShaderStorageImageExtendedFormats),
    ("shaderStorageImageMultisample", Feature::ShaderStorageImageMultisample),
    ("shaderStorageImageReadWithoutFormat", Feature::ShaderStorageImageReadWithoutFormat),
    ("shaderStorageImageWriteWithoutFormat", Feature::ShaderStorageImageWriteWithoutFormat),
    ("shaderTessellationAndGeometryPointSize", Feature::ShaderTessellationAndGeometryPointSize),
    ("shaderUniformBufferArrayDynamicIndexing", Feature::ShaderUniformBufferArrayDynamicIndexing),
    ("sparseBinding", Feature::SparseBinding),
    ("sparseResidency16Samples", Feature::SparseResidency16Samples),
    ("sparseResidency2Samples", Feature::SparseResidency2Samples),
    ("sparseResidency4Samples", Feature::SparseResidency4Samples),
    ("sparseResidency8Samples", Feature::SparseResidency8Samples),
    ("sparseResidencyAliased", Feature::SparseResidencyAliased),
    ("sparseResidencyBuffer", Feature::SparseResidencyBuffer),
    ("sparseResidencyImage2D", Feature::SparseResidencyImage2D),
    ("sparseResidencyImage3D", Feature::SparseResidencyImage3D),
    ("tessellationShader", Feature::TessellationShader),
    ("textureCompressionASTC_LDR", Feature::TextureCompressionAstcLdr),
    ("textureCompressionBC", Feature::TextureCompressionBc),
    ("textureCompressionETC2", Feature::TextureCompressionEtc2),
    ("variableMultisampleRate", Feature::VariableMultisampleRate),
    ("vertexPipelineStoresAndAtomics", Feature::VertexPipelineStoresAndAtomics),
    ("wideLines", Feature::WideLines),
];

impl Feature {
    /// Looks up one of the `VkPhysicalDeviceFeatures` by its member
    /// name. The special requirements can’t be found this way.
    pub fn from_device_feature_name(name: &str) -> Option<Feature> {
        DEVICE_FEATURES
            .binary_search_by(|&(feature_name, _)| feature_name.cmp(name))
            .ok()
            .map(|pos| DEVICE_FEATURES[pos].1)
    }

    /// The name of the feature as written in a `[require]` section.
    pub fn name(self) -> &'static str {
        match self {
            Feature::RobustBufferAccess => "robustBufferAccess",
            Feature::FullDrawIndexUint32 => "fullDrawIndexUint32",
            Feature::ImageCubeArray => "imageCubeArray",
            Feature::IndependentBlend => "independentBlend",
            Feature::GeometryShader => "geometryShader",
            Feature::TessellationShader => "tessellationShader",
            Feature::SampleRateShading => "sampleRateShading",
            Feature::DualSrcBlend => "dualSrcBlend",
            Feature::LogicOp => "logicOp",
            Feature::MultiDrawIndirect => "multiDrawIndirect",
            Feature::DrawIndirectFirstInstance => "drawIndirectFirstInstance",
            Feature::DepthClamp => "depthClamp",
            Feature::DepthBiasClamp => "depthBiasClamp",
            Feature::FillModeNonSolid => "fillModeNonSolid",
            Feature::DepthBounds => "depthBounds",
            Feature::WideLines => "wideLines",
            Feature::LargePoints => "largePoints",
            Feature::AlphaToOne => "alphaToOne",
            Feature::MultiViewport => "multiViewport",
            Feature::SamplerAnisotropy => "samplerAnisotropy",
            Feature::TextureCompressionEtc2 => "textureCompressionETC2",
            Feature::TextureCompressionAstcLdr => "textureCompressionASTC_LDR",
            Feature::TextureCompressionBc => "textureCompressionBC",
            Feature::OcclusionQueryPrecise => "occlusionQueryPrecise",
            Feature::PipelineStatisticsQuery => "pipelineStatisticsQuery",
            Feature::VertexPipelineStoresAndAtomics => "vertexPipelineStoresAndAtomics",
            Feature::FragmentStoresAndAtomics => "fragmentStoresAndAtomics",
            Feature::ShaderTessellationAndGeometryPointSize => "shaderTessellationAndGeometryPointSize",
            Feature::ShaderImageGatherExtended => "shaderImageGatherExtended",
            Feature::ShaderStorageImageExtendedFormats => "shaderStorageImageExtendedFormats",
            Feature::ShaderStorageImageMultisample => "shaderStorageImageMultisample",
            Feature::ShaderStorageImageReadWithoutFormat => "shaderStorageImageReadWithoutFormat",
            Feature::ShaderStorageImageWriteWithoutFormat => "shaderStorageImageWriteWithoutFormat",
            Feature::ShaderUniformBufferArrayDynamicIndexing => "shaderUniformBufferArrayDynamicIndexing",
            Feature::ShaderSampledImageArrayDynamicIndexing => "shaderSampledImageArrayDynamicIndexing",
            Feature::ShaderStorageBufferArrayDynamicIndexing => "shaderStorageBufferArrayDynamicIndexing",
            Feature::ShaderStorageImageArrayDynamicIndexing => "shaderStorageImageArrayDynamicIndexing",
            Feature::ShaderClipDistance => "shaderClipDistance",
            Feature::ShaderCullDistance => "shaderCullDistance",
            Feature::ShaderFloat64 => "shaderFloat64",
            Feature::ShaderInt64 => "shaderInt64",
            Feature::ShaderInt16 => "shaderInt16",
            Feature::ShaderResourceResidency => "shaderResourceResidency",
            Feature::ShaderResourceMinLod => "shaderResourceMinLod",
            Feature::SparseBinding => "sparseBinding",
            Feature::SparseResidencyBuffer => "sparseResidencyBuffer",
            Feature::SparseResidencyImage2D => "sparseResidencyImage2D",
            Feature::SparseResidencyImage3D => "sparseResidencyImage3D",
            Feature::SparseResidency2Samples => "sparseResidency2Samples",
            Feature::SparseResidency4Samples => "sparseResidency4Samples",
            Feature::SparseResidency8Samples => "sparseResidency8Samples",
            Feature::SparseResidency16Samples => "sparseResidency16Samples",
            Feature::SparseResidencyAliased => "sparseResidencyAliased",
            Feature::VariableMultisampleRate => "variableMultisampleRate",
            Feature::InheritedQueries => "inheritedQueries",
            Feature::Framebuffer => "framebuffer",
            Feature::DepthStencil => "depthstencil",
            Feature::FramebufferSize => "fbsize",
            Feature::VulkanVersion => "vulkan",
        }
    }

    /// Returns true for the features that are members of
    /// `VkPhysicalDeviceFeatures`.
    pub fn is_device_feature(self) -> bool {
        !matches!(
            self,
            Feature::Framebuffer
                | Feature::DepthStencil
                | Feature::FramebufferSize
                | Feature::VulkanVersion
        )
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Feature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup() {
        for &(name, feature) in DEVICE_FEATURES.iter() {
            assert_eq!(Feature::from_device_feature_name(name), Some(feature));
            assert_eq!(feature.name(), name);
            assert!(feature.is_device_feature());
        }

        for pair in DEVICE_FEATURES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }

        assert_eq!(
            Feature::from_device_feature_name("textureCompressionASTC_LDR"),
            Some(Feature::TextureCompressionAstcLdr),
        );
        assert_eq!(Feature::from_device_feature_name("RobustBufferAccess"), None);
        assert_eq!(Feature::from_device_feature_name("framebuffer"), None);
    }

    #[test]
    fn test_special() {
        assert!(!Feature::Framebuffer.is_device_feature());
        assert_eq!(Feature::FramebufferSize.to_string(), "fbsize");
        assert_eq!(Feature::VulkanVersion.name(), "vulkan");
    }
}
